use crate::modules::time_tracking::core::document::MaterialUsage;
use crate::shared::core::primitives::{EntryId, deserialize_present};
use serde::Deserialize;
use serde_json::Number;

/// Replacement of an existing entry. Also the approval path: any edit approves.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct EditTimeEntry {
    pub id: Option<EntryId>,
    pub updated: Option<UpdatedTimeEntry>,
}

/// `id` and `approved` sent by clients are ignored: the id never changes and
/// the edit itself approves the entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct UpdatedTimeEntry {
    pub employee_id: Option<String>,
    pub project_id: Option<String>,
    pub task_id: Option<String>,
    pub minutes_spent: Option<Number>,
    pub timestamp: Option<String>,
    #[serde(default, deserialize_with = "deserialize_present")]
    pub materials_used: Option<Option<MaterialUsage>>,
    pub materials_entered: Option<bool>,
}
