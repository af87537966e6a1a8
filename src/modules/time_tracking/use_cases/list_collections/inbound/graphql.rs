use async_graphql::{Context, Object, Result as GqlResult, SimpleObject};

use crate::modules::time_tracking::core::document::{
    Employee, Material, MaterialUsage, Project, Task, TimeEntry,
};
use crate::shell::state::AppState;

#[derive(SimpleObject, Clone)]
pub struct GqlEmployee {
    pub id: String,
    pub name: String,
}

impl From<Employee> for GqlEmployee {
    fn from(e: Employee) -> Self {
        Self {
            id: e.id,
            name: e.name,
        }
    }
}

#[derive(SimpleObject, Clone)]
pub struct GqlTaskBudget {
    pub task_id: String,
    pub budget: f64,
}

#[derive(SimpleObject, Clone)]
pub struct GqlProject {
    pub id: String,
    pub name: String,
    pub task_budgets: Vec<GqlTaskBudget>,
}

impl From<Project> for GqlProject {
    fn from(p: Project) -> Self {
        Self {
            id: p.id,
            name: p.name,
            task_budgets: p
                .task_budgets
                .into_iter()
                .map(|(task_id, budget)| GqlTaskBudget {
                    task_id,
                    budget: budget.as_f64().unwrap_or_default(),
                })
                .collect(),
        }
    }
}

/// Tasks and materials share a shape on this surface: seeded extras are not exposed.
#[derive(SimpleObject, Clone)]
pub struct GqlNamedItem {
    pub id: String,
    pub name: String,
}

impl From<Task> for GqlNamedItem {
    fn from(t: Task) -> Self {
        Self {
            id: t.id.to_string(),
            name: t.name,
        }
    }
}

impl From<Material> for GqlNamedItem {
    fn from(m: Material) -> Self {
        Self {
            id: m.id.to_string(),
            name: m.name,
        }
    }
}

#[derive(SimpleObject, Clone)]
pub struct GqlMaterialUsage {
    pub material_id: String,
    pub notes: String,
    pub reviewed: bool,
}

impl From<MaterialUsage> for GqlMaterialUsage {
    fn from(m: MaterialUsage) -> Self {
        Self {
            material_id: m.material_id,
            notes: m.notes,
            reviewed: m.reviewed,
        }
    }
}

#[derive(SimpleObject, Clone)]
pub struct GqlTimeEntry {
    pub id: u64,
    pub employee_id: String,
    pub project_id: String,
    pub task_id: String,
    pub minutes_spent: f64,
    pub timestamp: String,
    pub approved: bool,
    pub materials_used: Option<GqlMaterialUsage>,
    pub materials_entered: Option<bool>,
}

impl From<TimeEntry> for GqlTimeEntry {
    fn from(e: TimeEntry) -> Self {
        Self {
            id: e.id,
            employee_id: e.employee_id,
            project_id: e.project_id,
            task_id: e.task_id,
            minutes_spent: e.minutes_spent.as_f64().unwrap_or_default(),
            timestamp: e.timestamp,
            approved: e.approved,
            materials_used: e.materials_used.map(Into::into),
            materials_entered: e.materials_entered,
        }
    }
}

#[derive(Default)]
pub struct CollectionsQuery;

#[Object]
impl CollectionsQuery {
    async fn employees(&self, context: &Context<'_>) -> GqlResult<Vec<GqlEmployee>> {
        let state = context.data_unchecked::<AppState>();
        let list = state.collections.employees().await?;
        Ok(list.into_iter().map(Into::into).collect())
    }

    async fn projects(&self, context: &Context<'_>) -> GqlResult<Vec<GqlProject>> {
        let state = context.data_unchecked::<AppState>();
        let list = state.collections.projects().await?;
        Ok(list.into_iter().map(Into::into).collect())
    }

    async fn tasks(&self, context: &Context<'_>) -> GqlResult<Vec<GqlNamedItem>> {
        let state = context.data_unchecked::<AppState>();
        let list = state.collections.tasks().await?;
        Ok(list.into_iter().map(Into::into).collect())
    }

    async fn materials(&self, context: &Context<'_>) -> GqlResult<Vec<GqlNamedItem>> {
        let state = context.data_unchecked::<AppState>();
        let list = state.collections.materials().await?;
        Ok(list.into_iter().map(Into::into).collect())
    }

    async fn time_entries(&self, context: &Context<'_>) -> GqlResult<Vec<GqlTimeEntry>> {
        let state = context.data_unchecked::<AppState>();
        let list = state.collections.time_entries().await?;
        Ok(list.into_iter().map(Into::into).collect())
    }
}
