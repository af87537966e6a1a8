// Pure decision for a new time entry.
//
// Rules
// - employee_id, project_id, task_id and minutes_spent are required.
// - The id comes from the document counter, which then advances.
// - New entries are never approved.
// - Reported material starts unreviewed and marks the entry as materials_entered = false.
//   Without material, materials_entered stays absent.

use crate::modules::time_tracking::application::errors::ApplicationError;
use crate::modules::time_tracking::core::document::{Document, MaterialUsage, TimeEntry};
use crate::modules::time_tracking::use_cases::submit_time_entry::command::SubmitTimeEntry;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DecideError {
    #[error("Missing fields")]
    MissingFields,
}

impl From<DecideError> for ApplicationError {
    fn from(error: DecideError) -> Self {
        ApplicationError::Validation(error.to_string())
    }
}

pub fn decide_submit(
    document: &mut Document,
    command: SubmitTimeEntry,
    now: &str,
) -> Result<TimeEntry, DecideError> {
    let SubmitTimeEntry {
        employee_id: Some(employee_id),
        project_id: Some(project_id),
        task_id: Some(task_id),
        minutes_spent: Some(minutes_spent),
        timestamp,
        materials_used,
    } = command
    else {
        return Err(DecideError::MissingFields);
    };

    let materials_entered = materials_used.as_ref().map(|_| false);
    let entry = TimeEntry {
        id: document.allocate_entry_id(),
        employee_id,
        project_id,
        task_id,
        minutes_spent,
        timestamp: timestamp.unwrap_or_else(|| now.to_string()),
        approved: false,
        materials_used: materials_used.map(|m| MaterialUsage {
            material_id: m.material_id,
            notes: m.notes,
            reviewed: false,
        }),
        materials_entered,
    };
    document.time_entries.push(entry.clone());
    Ok(entry)
}
