// Process-wide owner of the persisted document.
//
// Responsibilities
// - Create the empty document on first access and persist it.
// - Run the migration on every load and persist only when it changed something.
// - Serialize every load / mutate / persist cycle through one gate so two requests
//   inside this process cannot overwrite each other's changes.
//
// Reads go through the gate as well, because a load may itself write.

use crate::modules::time_tracking::application::errors::ApplicationError;
use crate::modules::time_tracking::core::document::{Document, StoredDocument};
use crate::modules::time_tracking::core::migrate::migrate;
use crate::shared::infrastructure::document_store::{DocumentStore, DocumentStoreError};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{debug, info};

/// Result of a mutation closure: whether the document must be written back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome<T> {
    Changed(T),
    Unchanged(T),
}

pub struct DocumentGateway {
    store: Arc<dyn DocumentStore>,
    gate: Mutex<()>,
}

impl DocumentGateway {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self {
            store,
            gate: Mutex::new(()),
        }
    }

    pub async fn load(&self) -> Result<Document, DocumentStoreError> {
        let _guard = self.gate.lock().await;
        self.load_unguarded().await
    }

    pub async fn read<T>(&self, query: impl FnOnce(&Document) -> T) -> Result<T, DocumentStoreError> {
        let document = self.load().await?;
        Ok(query(&document))
    }

    pub async fn transact<T, E>(
        &self,
        mutation: impl FnOnce(&mut Document) -> Result<Outcome<T>, E>,
    ) -> Result<T, ApplicationError>
    where
        E: Into<ApplicationError>,
    {
        let _guard = self.gate.lock().await;
        let mut document = self.load_unguarded().await?;
        match mutation(&mut document).map_err(Into::<ApplicationError>::into)? {
            Outcome::Changed(value) => {
                self.persist(&document).await?;
                Ok(value)
            }
            Outcome::Unchanged(value) => Ok(value),
        }
    }

    async fn load_unguarded(&self) -> Result<Document, DocumentStoreError> {
        let Some(raw) = self.store.read().await? else {
            let document = Document::empty();
            self.persist(&document).await?;
            info!("initialized empty document");
            return Ok(document);
        };

        let stored: StoredDocument = serde_json::from_value(raw)?;
        let (document, migration) = migrate(stored);
        if migration.is_dirty() {
            info!(
                backfilled_ids = migration.backfilled_ids,
                counter_raised = migration.counter_raised,
                next_entry_id = document.next_entry_id,
                "migrated document"
            );
            self.persist(&document).await?;
        }
        Ok(document)
    }

    async fn persist(&self, document: &Document) -> Result<(), DocumentStoreError> {
        let value = serde_json::to_value(document)?;
        self.store.write(&value).await?;
        debug!(
            next_entry_id = document.next_entry_id,
            time_entries = document.time_entries.len(),
            "document persisted"
        );
        Ok(())
    }
}
