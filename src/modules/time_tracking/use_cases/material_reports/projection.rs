// Read views over material usage on approved entries.
//
// Only entries that are approved and carry materials_used take part. Names are joined
// by linear lookup against employees and materials, empty when unresolved.

use crate::modules::time_tracking::core::document::{Document, MaterialUsage, TimeEntry};
use crate::shared::core::primitives::EntryId;
use serde::Serialize;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MaterialLogs {
    pub pending: Vec<TimeEntry>,
    pub completed: Vec<TimeEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MaterialReportRow {
    pub id: EntryId,
    pub employee_id: String,
    pub project_id: String,
    pub task_id: String,
    pub material_id: String,
    pub notes: String,
    pub timestamp: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reviewed: Option<bool>,
    pub employee_name: String,
    pub material_name: String,
}

fn reported(document: &Document) -> impl Iterator<Item = (&TimeEntry, &MaterialUsage)> {
    document
        .time_entries
        .iter()
        .filter(|e| e.approved)
        .filter_map(|e| e.materials_used.as_ref().map(|usage| (e, usage)))
}

fn report_row(
    document: &Document,
    entry: &TimeEntry,
    usage: &MaterialUsage,
    reviewed: Option<bool>,
) -> MaterialReportRow {
    MaterialReportRow {
        id: entry.id,
        employee_id: entry.employee_id.clone(),
        project_id: entry.project_id.clone(),
        task_id: entry.task_id.clone(),
        material_id: usage.material_id.clone(),
        notes: usage.notes.clone(),
        timestamp: entry.timestamp.clone(),
        reviewed,
        employee_name: document.employee_name(&entry.employee_id).to_string(),
        material_name: document.material_name(&usage.material_id).to_string(),
    }
}

/// Splits reported entries by whether their material has been entered.
pub fn material_logs(document: &Document) -> MaterialLogs {
    let (completed, pending) = reported(document)
        .map(|(entry, _)| entry.clone())
        .partition(TimeEntry::materials_entered);
    MaterialLogs { pending, completed }
}

pub fn reported_materials(document: &Document) -> Vec<MaterialReportRow> {
    reported(document)
        .map(|(entry, usage)| report_row(document, entry, usage, Some(usage.reviewed)))
        .collect()
}

pub fn reviewed_materials(document: &Document) -> Vec<MaterialReportRow> {
    by_review_state(document, true)
}

pub fn unreviewed_materials(document: &Document) -> Vec<MaterialReportRow> {
    by_review_state(document, false)
}

fn by_review_state(document: &Document, reviewed: bool) -> Vec<MaterialReportRow> {
    reported(document)
        .filter(|(_, usage)| usage.reviewed == reviewed)
        .map(|(entry, usage)| report_row(document, entry, usage, None))
        .collect()
}
