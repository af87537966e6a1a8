use axum::{Json, extract::State, extract::rejection::JsonRejection};
use serde::Serialize;

use crate::modules::time_tracking::application::errors::ApplicationError;
use crate::modules::time_tracking::core::document::TimeEntry;
use crate::modules::time_tracking::use_cases::edit_time_entry::command::EditTimeEntry;
use crate::shell::state::AppState;

#[derive(Serialize)]
pub struct EditTimeEntryResponse {
    pub success: bool,
    pub entry: TimeEntry,
}

pub async fn handle(
    State(state): State<AppState>,
    body: Result<Json<EditTimeEntry>, JsonRejection>,
) -> Result<Json<EditTimeEntryResponse>, ApplicationError> {
    let Json(command) = body?;
    let entry = state.edit_time_entry.handle(command).await?;
    Ok(Json(EditTimeEntryResponse {
        success: true,
        entry,
    }))
}
