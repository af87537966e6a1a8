use async_graphql::{Context, InputObject, Object, Result as GqlResult};
use serde_json::Number;

use crate::modules::time_tracking::use_cases::list_collections::inbound::graphql::GqlTimeEntry;
use crate::modules::time_tracking::use_cases::submit_time_entry::command::{
    ReportedMaterial, SubmitTimeEntry,
};
use crate::shell::state::AppState;

#[derive(InputObject)]
pub struct GqlReportedMaterial {
    pub material_id: String,
    pub notes: Option<String>,
}

/// Whole values are stored as integers so they read back the same over HTTP.
fn minutes(value: f64) -> Option<Number> {
    if value.fract() == 0.0 && value.abs() < i64::MAX as f64 {
        Some(Number::from(value as i64))
    } else {
        Number::from_f64(value)
    }
}

#[derive(Default)]
pub struct SubmitTimeEntryMutation;

#[Object]
impl SubmitTimeEntryMutation {
    #[allow(clippy::too_many_arguments)]
    async fn submit_time_entry(
        &self,
        context: &Context<'_>,
        employee_id: String,
        project_id: String,
        task_id: String,
        minutes_spent: f64,
        timestamp: Option<String>,
        materials_used: Option<GqlReportedMaterial>,
    ) -> GqlResult<GqlTimeEntry> {
        let state = context.data_unchecked::<AppState>();

        let command = SubmitTimeEntry {
            employee_id: Some(employee_id),
            project_id: Some(project_id),
            task_id: Some(task_id),
            minutes_spent: minutes(minutes_spent),
            timestamp,
            materials_used: materials_used.map(|m| ReportedMaterial {
                material_id: m.material_id,
                notes: m.notes.unwrap_or_default(),
            }),
        };

        let entry = state
            .submit_time_entry
            .handle(command)
            .await
            .map_err(|e| async_graphql::Error::new(e.to_string()))?;
        Ok(entry.into())
    }
}
