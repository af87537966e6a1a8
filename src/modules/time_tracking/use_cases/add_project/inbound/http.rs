use axum::{Json, extract::State, extract::rejection::JsonRejection};

use crate::modules::time_tracking::adapters::inbound::envelope::Acknowledged;
use crate::modules::time_tracking::application::errors::ApplicationError;
use crate::modules::time_tracking::use_cases::add_project::decide::AddProject;
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    body: Result<Json<AddProject>, JsonRejection>,
) -> Result<Json<Acknowledged>, ApplicationError> {
    let Json(command) = body?;
    state.add_project.handle(command).await?;
    Ok(Acknowledged::ok())
}
