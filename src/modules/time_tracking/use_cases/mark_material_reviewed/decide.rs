use crate::modules::time_tracking::application::document_gateway::Outcome;
use crate::modules::time_tracking::application::errors::ApplicationError;
use crate::modules::time_tracking::core::document::Document;
use crate::shared::core::primitives::EntryId;
use serde::Deserialize;

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct MarkMaterialReviewed {
    pub id: Option<EntryId>,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DecideError {
    #[error("Missing id")]
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

/// Id 0 counts as missing. An entry without material is reported as not found.
pub fn decide_mark_reviewed(
    document: &mut Document,
    command: MarkMaterialReviewed,
) -> Result<Outcome<EntryId>, DecideError> {
    let id = command.id.filter(|id| *id != 0).ok_or(DecideError::MissingId)?;
    let usage = document
        .find_entry_mut(id)
        .and_then(|e| e.materials_used.as_mut())
        .ok_or(DecideError::NotFound)?;

    if usage.reviewed {
        return Ok(Outcome::Unchanged(id));
    }
    usage.reviewed = true;
    Ok(Outcome::Changed(id))
}
