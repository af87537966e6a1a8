use crate::modules::time_tracking::application::errors::ApplicationError;
use crate::modules::time_tracking::core::document::{Document, Employee};
use crate::shared::core::primitives::non_empty;
use serde::Deserialize;

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct DeleteEmployee {
    pub id: Option<String>,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DecideError {
    #[error("Missing employee id")]
    MissingId,

    #[error("Employee not found")]
    NotFound,
}

impl From<DecideError> for ApplicationError {
    fn from(error: DecideError) -> Self {
        match error {
            DecideError::MissingId => ApplicationError::Validation(error.to_string()),
            DecideError::NotFound => ApplicationError::NotFound(error.to_string()),
        }
    }
}

/// Time entries referencing the employee are left as they are.
pub fn decide_delete_employee(
    document: &mut Document,
    command: DeleteEmployee,
) -> Result<Employee, DecideError> {
    let id = non_empty(command.id).ok_or(DecideError::MissingId)?;
    let position = document
        .employees
        .iter()
        .position(|e| e.id == id)
        .ok_or(DecideError::NotFound)?;
    Ok(document.employees.remove(position))
}
