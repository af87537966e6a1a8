use async_graphql::{Context, Object, Result as GqlResult, SimpleObject};

use crate::modules::time_tracking::use_cases::list_collections::inbound::graphql::GqlTimeEntry;
use crate::modules::time_tracking::use_cases::material_reports::projection::{
    MaterialLogs, MaterialReportRow,
};
use crate::shell::state::AppState;

#[derive(SimpleObject, Clone)]
pub struct GqlMaterialLogs {
    pub pending: Vec<GqlTimeEntry>,
    pub completed: Vec<GqlTimeEntry>,
}

impl From<MaterialLogs> for GqlMaterialLogs {
    fn from(logs: MaterialLogs) -> Self {
        Self {
            pending: logs.pending.into_iter().map(Into::into).collect(),
            completed: logs.completed.into_iter().map(Into::into).collect(),
        }
    }
}

#[derive(SimpleObject, Clone)]
pub struct GqlMaterialReportRow {
    pub id: u64,
    pub employee_id: String,
    pub project_id: String,
    pub task_id: String,
    pub material_id: String,
    pub notes: String,
    pub timestamp: String,
    pub reviewed: Option<bool>,
    pub employee_name: String,
    pub material_name: String,
}

impl From<MaterialReportRow> for GqlMaterialReportRow {
    fn from(r: MaterialReportRow) -> Self {
        Self {
            id: r.id,
            employee_id: r.employee_id,
            project_id: r.project_id,
            task_id: r.task_id,
            material_id: r.material_id,
            notes: r.notes,
            timestamp: r.timestamp,
            reviewed: r.reviewed,
            employee_name: r.employee_name,
            material_name: r.material_name,
        }
    }
}

fn rows(list: Vec<MaterialReportRow>) -> Vec<GqlMaterialReportRow> {
    list.into_iter().map(Into::into).collect()
}

#[derive(Default)]
pub struct MaterialReportsQuery;

#[Object]
impl MaterialReportsQuery {
    async fn material_logs(&self, context: &Context<'_>) -> GqlResult<GqlMaterialLogs> {
        let state = context.data_unchecked::<AppState>();
        Ok(state.material_reports.logs().await?.into())
    }

    async fn reported_materials(&self, context: &Context<'_>) -> GqlResult<Vec<GqlMaterialReportRow>> {
        let state = context.data_unchecked::<AppState>();
        Ok(rows(state.material_reports.reported().await?))
    }

    async fn materials_reviewed(&self, context: &Context<'_>) -> GqlResult<Vec<GqlMaterialReportRow>> {
        let state = context.data_unchecked::<AppState>();
        Ok(rows(state.material_reports.reviewed().await?))
    }

    async fn materials_unreviewed(&self, context: &Context<'_>) -> GqlResult<Vec<GqlMaterialReportRow>> {
        let state = context.data_unchecked::<AppState>();
        Ok(rows(state.material_reports.unreviewed().await?))
    }
}
