use axum::{Json, extract::State};

use crate::modules::time_tracking::application::errors::ApplicationError;
use crate::modules::time_tracking::use_cases::material_reports::projection::{
    MaterialLogs, MaterialReportRow,
};
use crate::shell::state::AppState;

pub async fn logs(State(state): State<AppState>) -> Result<Json<MaterialLogs>, ApplicationError> {
    Ok(Json(state.material_reports.logs().await?))
}

pub async fn reported(
    State(state): State<AppState>,
) -> Result<Json<Vec<MaterialReportRow>>, ApplicationError> {
    Ok(Json(state.material_reports.reported().await?))
}

pub async fn reviewed(
    State(state): State<AppState>,
) -> Result<Json<Vec<MaterialReportRow>>, ApplicationError> {
    Ok(Json(state.material_reports.reviewed().await?))
}

pub async fn unreviewed(
    State(state): State<AppState>,
) -> Result<Json<Vec<MaterialReportRow>>, ApplicationError> {
    Ok(Json(state.material_reports.unreviewed().await?))
}
