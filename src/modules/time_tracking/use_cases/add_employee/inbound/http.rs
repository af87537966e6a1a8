use axum::{Json, extract::State, extract::rejection::JsonRejection};

use crate::modules::time_tracking::adapters::inbound::envelope::Acknowledged;
use crate::modules::time_tracking::application::errors::ApplicationError;
use crate::modules::time_tracking::use_cases::add_employee::decide::AddEmployee;
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    body: Result<Json<AddEmployee>, JsonRejection>,
) -> Result<Json<Acknowledged>, ApplicationError> {
    let Json(command) = body?;
    state.add_employee.handle(command).await?;
    Ok(Acknowledged::ok())
}
