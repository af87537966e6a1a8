// Intent to log minutes against a project task.
//
// Fields mirror the request body and stay optional here; presence is checked by the decider
// so the rule lives in one place for every inbound adapter. Minutes may be fractional.

use serde_json::Number;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubmitTimeEntry {
    pub employee_id: Option<String>,
    pub project_id: Option<String>,
    pub task_id: Option<String>,
    pub minutes_spent: Option<Number>,
    pub timestamp: Option<String>,
    pub materials_used: Option<ReportedMaterial>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReportedMaterial {
    pub material_id: String,
    pub notes: String,
}
