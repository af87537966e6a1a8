// Load-time migration from the stored shape to the working Document.
//
// Rules
// - A missing counter starts at FIRST_ENTRY_ID.
// - The counter is raised above the largest id already present, so backfilled ids never collide.
// - Each entry without an id takes the counter value, in file order, and the counter advances.
//
// Pure: the caller decides whether to persist, based on `Migration::is_dirty`.

use crate::modules::time_tracking::core::document::{Document, StoredDocument};
use crate::shared::core::primitives::FIRST_ENTRY_ID;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Migration {
    pub backfilled_ids: usize,
    pub counter_raised: bool,
}

impl Migration {
    pub fn is_dirty(&self) -> bool {
        self.backfilled_ids > 0 || self.counter_raised
    }
}

pub fn migrate(stored: StoredDocument) -> (Document, Migration) {
    let mut migration = Migration::default();
    let mut next_entry_id = stored.next_entry_id.unwrap_or(FIRST_ENTRY_ID);

    if let Some(max_id) = stored.time_entries.iter().filter_map(|e| e.id).max()
        && next_entry_id <= max_id
    {
        next_entry_id = max_id + 1;
        migration.counter_raised = true;
    }

    let time_entries = stored
        .time_entries
        .into_iter()
        .map(|entry| match entry.id {
            Some(id) => entry.into_entry(id),
            None => {
                let id = next_entry_id;
                next_entry_id += 1;
                migration.backfilled_ids += 1;
                entry.into_entry(id)
            }
        })
        .collect();

    let document = Document {
        next_entry_id,
        employees: stored.employees,
        projects: stored.projects,
        tasks: stored.tasks,
        time_entries,
        materials: stored.materials,
    };
    (document, migration)
}
