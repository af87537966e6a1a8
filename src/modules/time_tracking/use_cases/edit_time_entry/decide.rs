// Pure decision for replacing an entry.
//
// Rules
// - id and updated are required, then the entry must exist.
// - updated must name employee, project, task and minutes.
// - The stored id is kept and approved is forced to true.
// - timestamp, materials_used and materials_entered fall back to the stored values when
//   updated omits them. An explicit null materials_used clears the material report.

use crate::modules::time_tracking::application::errors::ApplicationError;
use crate::modules::time_tracking::core::document::{Document, TimeEntry};
use crate::modules::time_tracking::use_cases::edit_time_entry::command::{
    EditTimeEntry, UpdatedTimeEntry,
};

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DecideError {
    #[error("Missing id or updated")]
    MissingIdOrUpdated,

    #[error("Entry not found")]
    NotFound,

    #[error("Missing fields in updated")]
    MissingUpdatedFields,
}

impl From<DecideError> for ApplicationError {
    fn from(error: DecideError) -> Self {
        match error {
            DecideError::NotFound => ApplicationError::NotFound(error.to_string()),
            _ => ApplicationError::Validation(error.to_string()),
        }
    }
}

pub fn decide_edit(document: &mut Document, command: EditTimeEntry) -> Result<TimeEntry, DecideError> {
    let (Some(id), Some(updated)) = (command.id, command.updated) else {
        return Err(DecideError::MissingIdOrUpdated);
    };
    let entry = document.find_entry_mut(id).ok_or(DecideError::NotFound)?;

    let UpdatedTimeEntry {
        employee_id: Some(employee_id),
        project_id: Some(project_id),
        task_id: Some(task_id),
        minutes_spent: Some(minutes_spent),
        timestamp,
        materials_used,
        materials_entered,
    } = updated
    else {
        return Err(DecideError::MissingUpdatedFields);
    };

    let replacement = TimeEntry {
        id: entry.id,
        employee_id,
        project_id,
        task_id,
        minutes_spent,
        timestamp: timestamp.unwrap_or_else(|| entry.timestamp.clone()),
        approved: true,
        materials_used: materials_used.unwrap_or_else(|| entry.materials_used.clone()),
        materials_entered: materials_entered.or(entry.materials_entered),
    };
    *entry = replacement.clone();
    Ok(replacement)
}

#[cfg(test)]
mod edit_time_entry_decide_tests {
    use super::*;
    use crate::modules::time_tracking::core::document::MaterialUsage;
    use crate::tests::fixtures::documents::seeded_document;
    use rstest::{fixture, rstest};
    use serde_json::Number;

    #[fixture]
    fn updated() -> UpdatedTimeEntry {
        UpdatedTimeEntry {
            employee_id: Some("e2".into()),
            project_id: Some("p1".into()),
            task_id: Some("t2".into()),
            minutes_spent: Some(Number::from(90)),
            ..UpdatedTimeEntry::default()
        }
    }

    fn edit(id: u64, updated: UpdatedTimeEntry) -> EditTimeEntry {
        EditTimeEntry {
            id: Some(id),
            updated: Some(updated),
        }
    }

    #[rstest]
    fn it_should_replace_the_entry_and_approve_it(updated: UpdatedTimeEntry) {
        let mut document = seeded_document();
        let before = document.time_entries[0].clone();
        assert!(!before.approved);

        let entry = decide_edit(&mut document, edit(before.id, updated)).unwrap();

        assert_eq!(entry.id, before.id);
        assert!(entry.approved);
        assert_eq!(entry.employee_id, "e2");
        assert_eq!(entry.minutes_spent, Number::from(90));
        assert_eq!(entry.timestamp, before.timestamp);
        assert_eq!(document.time_entries[0], entry);
    }

    #[rstest]
    fn it_should_keep_stored_material_fields_when_omitted(updated: UpdatedTimeEntry) {
        let mut document = seeded_document();
        let before = document.time_entries[1].clone();
        assert!(before.materials_used.is_some());

        let entry = decide_edit(&mut document, edit(before.id, updated)).unwrap();

        assert_eq!(entry.materials_used, before.materials_used);
        assert_eq!(entry.materials_entered, before.materials_entered);
    }

    #[rstest]
    fn it_should_clear_material_on_explicit_null(mut updated: UpdatedTimeEntry) {
        let mut document = seeded_document();
        let id = document.time_entries[1].id;
        updated.materials_used = Some(None);

        let entry = decide_edit(&mut document, edit(id, updated)).unwrap();
        assert_eq!(entry.materials_used, None);
    }

    #[rstest]
    fn it_should_replace_material_and_mark_it_entered(mut updated: UpdatedTimeEntry) {
        let mut document = seeded_document();
        let id = document.time_entries[1].id;
        updated.materials_used = Some(Some(MaterialUsage {
            material_id: "m2".into(),
            notes: "swapped".into(),
            reviewed: false,
        }));
        updated.materials_entered = Some(true);

        let entry = decide_edit(&mut document, edit(id, updated)).unwrap();
        assert_eq!(entry.materials_used.unwrap().material_id, "m2");
        assert_eq!(entry.materials_entered, Some(true));
    }

    #[rstest]
    fn it_should_reject_a_missing_id_or_payload(updated: UpdatedTimeEntry) {
        let mut document = seeded_document();
        let without_id = EditTimeEntry {
            id: None,
            updated: Some(updated),
        };
        let without_payload = EditTimeEntry {
            id: Some(1),
            updated: None,
        };
        assert_eq!(decide_edit(&mut document, without_id), Err(DecideError::MissingIdOrUpdated));
        assert_eq!(
            decide_edit(&mut document, without_payload),
            Err(DecideError::MissingIdOrUpdated)
        );
    }

    #[rstest]
    fn it_should_report_an_unknown_entry(updated: UpdatedTimeEntry) {
        let mut document = seeded_document();
        let before = document.clone();
        assert_eq!(decide_edit(&mut document, edit(999, updated)), Err(DecideError::NotFound));
        assert_eq!(document, before);
    }

    #[rstest]
    fn it_should_reject_an_incomplete_payload(mut updated: UpdatedTimeEntry) {
        let mut document = seeded_document();
        let before = document.clone();
        updated.minutes_spent = None;
        let id = document.time_entries[0].id;
        assert_eq!(
            decide_edit(&mut document, edit(id, updated)),
            Err(DecideError::MissingUpdatedFields)
        );
        assert_eq!(document, before);
    }
}
