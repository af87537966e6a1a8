// Shared test fixture for the SubmitTimeEntry command.
// Defaults come from json/submit_time_entry.json: every required field set, no timestamp,
// no material.

use crate::modules::time_tracking::use_cases::submit_time_entry::command::{
    ReportedMaterial, SubmitTimeEntry,
};
use serde::Deserialize;
use serde_json::Number;

const SUBMIT_TIME_ENTRY_JSON: &str = include_str!("json/submit_time_entry.json");

// JSON -> DTO (transport shape)
#[derive(Debug, Clone, Deserialize)]
pub struct SubmitTimeEntryDto {
    pub employee_id: String,
    pub project_id: String,
    pub task_id: String,
    pub minutes_spent: Number,
}

pub struct SubmitTimeEntryBuilder {
    inner: SubmitTimeEntry,
}

impl Default for SubmitTimeEntryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl SubmitTimeEntryBuilder {
    pub fn new() -> Self {
        let dto: SubmitTimeEntryDto = serde_json::from_str(SUBMIT_TIME_ENTRY_JSON).unwrap();

        Self {
            inner: SubmitTimeEntry {
                employee_id: Some(dto.employee_id),
                project_id: Some(dto.project_id),
                task_id: Some(dto.task_id),
                minutes_spent: Some(dto.minutes_spent),
                timestamp: None,
                materials_used: None,
            },
        }
    }

    pub fn employee_id(mut self, v: impl Into<String>) -> Self {
        self.inner.employee_id = Some(v.into());
        self
    }

    pub fn minutes_spent(mut self, v: impl Into<Number>) -> Self {
        self.inner.minutes_spent = Some(v.into());
        self
    }

    pub fn timestamp(mut self, v: impl Into<String>) -> Self {
        self.inner.timestamp = Some(v.into());
        self
    }

    pub fn materials_used(mut self, v: ReportedMaterial) -> Self {
        self.inner.materials_used = Some(v);
        self
    }

    pub fn without_employee_id(mut self) -> Self {
        self.inner.employee_id = None;
        self
    }

    pub fn without_project_id(mut self) -> Self {
        self.inner.project_id = None;
        self
    }

    pub fn without_task_id(mut self) -> Self {
        self.inner.task_id = None;
        self
    }

    pub fn without_minutes_spent(mut self) -> Self {
        self.inner.minutes_spent = None;
        self
    }

    pub fn build(self) -> SubmitTimeEntry {
        self.inner
    }
}

#[cfg(test)]
mod submit_time_entry_builder_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn default_delegates_to_new_and_parses_json() {
        let built = SubmitTimeEntryBuilder::default().build();
        assert_eq!(built.employee_id.as_deref(), Some("e1"));
        assert_eq!(built.project_id.as_deref(), Some("p1"));
        assert_eq!(built.task_id.as_deref(), Some("t1"));
        assert_eq!(built.minutes_spent, Some(Number::from(30)));
        assert_eq!(built.timestamp, None);
        assert_eq!(built.materials_used, None);
    }

    #[rstest]
    fn setters_override_fields_and_without_clears_them() {
        let custom = SubmitTimeEntryBuilder::new()
            .employee_id("e2")
            .minutes_spent(90)
            .timestamp("2025-01-01T00:00:00")
            .without_project_id()
            .build();

        assert_eq!(custom.employee_id.as_deref(), Some("e2"));
        assert_eq!(custom.minutes_spent, Some(Number::from(90)));
        assert_eq!(custom.timestamp.as_deref(), Some("2025-01-01T00:00:00"));
        assert_eq!(custom.project_id, None);
    }
}
