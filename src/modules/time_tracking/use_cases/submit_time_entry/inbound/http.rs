use axum::{Json, extract::State, extract::rejection::JsonRejection};
use serde::{Deserialize, Serialize};
use serde_json::Number;

use crate::modules::time_tracking::application::errors::ApplicationError;
use crate::modules::time_tracking::core::document::TimeEntry;
use crate::modules::time_tracking::use_cases::submit_time_entry::command::{
    ReportedMaterial, SubmitTimeEntry,
};
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct SubmitTimeEntryBody {
    pub employee_id: Option<String>,
    pub project_id: Option<String>,
    pub task_id: Option<String>,
    pub minutes_spent: Option<Number>,
    pub timestamp: Option<String>,
    pub materials_used: Option<ReportedMaterialBody>,
}

#[derive(Deserialize)]
pub struct ReportedMaterialBody {
    pub material_id: Option<String>,
    pub notes: Option<String>,
}

impl From<SubmitTimeEntryBody> for SubmitTimeEntry {
    fn from(body: SubmitTimeEntryBody) -> Self {
        Self {
            employee_id: body.employee_id,
            project_id: body.project_id,
            task_id: body.task_id,
            minutes_spent: body.minutes_spent,
            timestamp: body.timestamp,
            // an object without material_id reports nothing
            materials_used: body.materials_used.and_then(|m| {
                m.material_id.map(|material_id| ReportedMaterial {
                    material_id,
                    notes: m.notes.unwrap_or_default(),
                })
            }),
        }
    }
}

#[derive(Serialize)]
pub struct SubmitTimeEntryResponse {
    pub success: bool,
    pub entry: TimeEntry,
}

pub async fn handle(
    State(state): State<AppState>,
    body: Result<Json<SubmitTimeEntryBody>, JsonRejection>,
) -> Result<Json<SubmitTimeEntryResponse>, ApplicationError> {
    let Json(body) = body?;
    let entry = state.submit_time_entry.handle(body.into()).await?;
    Ok(Json(SubmitTimeEntryResponse {
        success: true,
        entry,
    }))
}
