use axum::{Json, extract::State};

use crate::modules::time_tracking::application::errors::ApplicationError;
use crate::modules::time_tracking::core::document::{
    Employee, Material, Project, Task, TimeEntry,
};
use crate::shell::state::AppState;

pub async fn employees(State(state): State<AppState>) -> Result<Json<Vec<Employee>>, ApplicationError> {
    Ok(Json(state.collections.employees().await?))
}

pub async fn projects(State(state): State<AppState>) -> Result<Json<Vec<Project>>, ApplicationError> {
    Ok(Json(state.collections.projects().await?))
}

pub async fn tasks(State(state): State<AppState>) -> Result<Json<Vec<Task>>, ApplicationError> {
    Ok(Json(state.collections.tasks().await?))
}

pub async fn materials(State(state): State<AppState>) -> Result<Json<Vec<Material>>, ApplicationError> {
    Ok(Json(state.collections.materials().await?))
}

pub async fn time_entries(
    State(state): State<AppState>,
) -> Result<Json<Vec<TimeEntry>>, ApplicationError> {
    Ok(Json(state.collections.time_entries().await?))
}
