use axum::{Json, extract::State, extract::rejection::JsonRejection};

use crate::modules::time_tracking::adapters::inbound::envelope::Acknowledged;
use crate::modules::time_tracking::application::errors::ApplicationError;
use crate::modules::time_tracking::use_cases::delete_employee::decide::DeleteEmployee;
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    body: Result<Json<DeleteEmployee>, JsonRejection>,
) -> Result<Json<Acknowledged>, ApplicationError> {
    let Json(command) = body?;
    state.delete_employee.handle(command).await?;
    Ok(Acknowledged::ok())
}
