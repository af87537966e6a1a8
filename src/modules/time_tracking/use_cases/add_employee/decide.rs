use crate::modules::time_tracking::application::errors::ApplicationError;
use crate::modules::time_tracking::core::document::{Document, Employee};
use crate::shared::core::primitives::non_empty;
use serde::Deserialize;

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct AddEmployee {
    pub id: Option<String>,
    pub name: Option<String>,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DecideError {
    #[error("Missing id or name")]
    MissingIdOrName,

    #[error("Employee ID already exists")]
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

/// Empty strings count as missing.
pub fn decide_add_employee(document: &mut Document, command: AddEmployee) -> Result<Employee, DecideError> {
    let (Some(id), Some(name)) = (non_empty(command.id), non_empty(command.name)) else {
        return Err(DecideError::MissingIdOrName);
    };
    if document.employees.iter().any(|e| e.id == id) {
        return Err(DecideError::AlreadyExists);
    }
    let employee = Employee { id, name };
    document.employees.push(employee.clone());
    Ok(employee)
}
