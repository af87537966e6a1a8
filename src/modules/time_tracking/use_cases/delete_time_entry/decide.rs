use crate::modules::time_tracking::application::errors::ApplicationError;
use crate::modules::time_tracking::core::document::{Document, TimeEntry};
use crate::shared::core::primitives::EntryId;
use serde::Deserialize;

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct DeleteTimeEntry {
    pub id: Option<EntryId>,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DecideError {
    #[error("Missing entry id")]
    MissingId,

    #[error("Entry not found")]
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

/// Physically removes the entry and returns it.
pub fn decide_delete(document: &mut Document, command: DeleteTimeEntry) -> Result<TimeEntry, DecideError> {
    let id = command.id.ok_or(DecideError::MissingId)?;
    let position = document
        .time_entries
        .iter()
        .position(|e| e.id == id)
        .ok_or(DecideError::NotFound)?;
    Ok(document.time_entries.remove(position))
}
