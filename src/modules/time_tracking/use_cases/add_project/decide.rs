use crate::modules::time_tracking::application::errors::ApplicationError;
use crate::modules::time_tracking::core::document::{Document, Project};
use crate::shared::core::primitives::non_empty;
use serde::Deserialize;
use serde_json::Number;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct AddProject {
    pub id: Option<String>,
    pub name: Option<String>,
    pub task_budgets: Option<BTreeMap<String, Number>>,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DecideError {
    #[error("Missing id or name")]
    MissingIdOrName,

    #[error("Project ID already exists")]
    AlreadyExists,
}

impl From<DecideError> for ApplicationError {
    fn from(error: DecideError) -> Self {
        match error {
            DecideError::MissingIdOrName => ApplicationError::Validation(error.to_string()),
            DecideError::AlreadyExists => ApplicationError::Conflict(error.to_string()),
        }
    }
}

pub fn decide_add_project(document: &mut Document, command: AddProject) -> Result<Project, DecideError> {
    let (Some(id), Some(name)) = (non_empty(command.id), non_empty(command.name)) else {
        return Err(DecideError::MissingIdOrName);
    };
    if document.projects.iter().any(|p| p.id == id) {
        return Err(DecideError::AlreadyExists);
    }
    let project = Project {
        id,
        name,
        task_budgets: command.task_budgets.unwrap_or_default(),
    };
    document.projects.push(project.clone());
    Ok(project)
}
