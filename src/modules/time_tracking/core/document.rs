// The single persisted document and every record it holds.
//
// Two shapes exist:
// - StoredDocument: what may be found on disk, including legacy entries without an id.
// - Document: the migrated shape every use case works on. Every entry has an id here.
//
// Tasks and materials are seeded by hand, so their ids may be strings or numbers and
// fields this service does not know about are kept in `extra` and written back untouched.

use crate::shared::core::primitives::{EntryId, FIRST_ENTRY_ID};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};
use std::collections::BTreeMap;
use std::fmt;

/// Id of a hand-seeded record. Compared with request ids by its text form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SeededId {
    Text(String),
    Number(Number),
}

impl SeededId {
    pub fn matches(&self, id: &str) -> bool {
        match self {
            SeededId::Text(text) => text == id,
            SeededId::Number(number) => number.to_string() == id,
        }
    }
}

impl fmt::Display for SeededId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SeededId::Text(text) => f.write_str(text),
            SeededId::Number(number) => write!(f, "{number}"),
        }
    }
}

impl From<&str> for SeededId {
    fn from(id: &str) -> Self {
        SeededId::Text(id.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub task_budgets: BTreeMap<String, Number>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: SeededId,
    #[serde(default)]
    pub name: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Material {
    pub id: SeededId,
    #[serde(default)]
    pub name: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaterialUsage {
    #[serde(default)]
    pub material_id: String,
    #[serde(default)]
    pub notes: String,
    #[serde(default)]
    pub reviewed: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeEntry {
    pub id: EntryId,
    pub employee_id: String,
    pub project_id: String,
    pub task_id: String,
    pub minutes_spent: Number,
    pub timestamp: String,
    #[serde(default)]
    pub approved: bool,
    #[serde(default)]
    pub materials_used: Option<MaterialUsage>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub materials_entered: Option<bool>,
}

impl TimeEntry {
    pub fn materials_entered(&self) -> bool {
        self.materials_entered.unwrap_or(false)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub next_entry_id: EntryId,
    pub employees: Vec<Employee>,
    pub projects: Vec<Project>,
    pub tasks: Vec<Task>,
    pub time_entries: Vec<TimeEntry>,
    /// Absent until seeded; an existing key is kept even when empty.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub materials: Option<Vec<Material>>,
}

impl Default for Document {
    fn default() -> Self {
        Self::empty()
    }
}

impl Document {
    pub fn empty() -> Self {
        Self {
            next_entry_id: FIRST_ENTRY_ID,
            employees: Vec::new(),
            projects: Vec::new(),
            tasks: Vec::new(),
            time_entries: Vec::new(),
            materials: None,
        }
    }

    /// Hands out the current counter value and advances it.
    pub fn allocate_entry_id(&mut self) -> EntryId {
        let id = self.next_entry_id;
        self.next_entry_id += 1;
        id
    }

    pub fn find_entry_mut(&mut self, id: EntryId) -> Option<&mut TimeEntry> {
        self.time_entries.iter_mut().find(|e| e.id == id)
    }

    pub fn materials(&self) -> &[Material] {
        self.materials.as_deref().unwrap_or_default()
    }

    pub fn employee_name(&self, employee_id: &str) -> &str {
        self.employees
            .iter()
            .find(|e| e.id == employee_id)
            .map(|e| e.name.as_str())
            .unwrap_or("")
    }

    pub fn material_name(&self, material_id: &str) -> &str {
        self.materials()
            .iter()
            .find(|m| m.id.matches(material_id))
            .map(|m| m.name.as_str())
            .unwrap_or("")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct StoredTimeEntry {
    #[serde(default)]
    pub id: Option<EntryId>,
    pub employee_id: String,
    pub project_id: String,
    pub task_id: String,
    pub minutes_spent: Number,
    pub timestamp: String,
    #[serde(default)]
    pub approved: bool,
    #[serde(default)]
    pub materials_used: Option<MaterialUsage>,
    #[serde(default)]
    pub materials_entered: Option<bool>,
}

impl StoredTimeEntry {
    pub fn into_entry(self, id: EntryId) -> TimeEntry {
        TimeEntry {
            id,
            employee_id: self.employee_id,
            project_id: self.project_id,
            task_id: self.task_id,
            minutes_spent: self.minutes_spent,
            timestamp: self.timestamp,
            approved: self.approved,
            materials_used: self.materials_used,
            materials_entered: self.materials_entered,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct StoredDocument {
    #[serde(default)]
    pub next_entry_id: Option<EntryId>,
    #[serde(default)]
    pub employees: Vec<Employee>,
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub tasks: Vec<Task>,
    #[serde(default)]
    pub time_entries: Vec<StoredTimeEntry>,
    #[serde(default)]
    pub materials: Option<Vec<Material>>,
}
