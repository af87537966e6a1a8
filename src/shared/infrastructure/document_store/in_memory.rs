use crate::shared::infrastructure::document_store::{DocumentStore, DocumentStoreError};
use serde_json::Value;
use std::sync::atomic::{AtomicUsize, Ordering};
use tokio::sync::RwLock;

#[derive(Default)]
pub struct InMemoryDocumentStore {
    inner: RwLock<Option<Value>>,
    writes: AtomicUsize,
    is_offline: bool,
}

impl InMemoryDocumentStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_document(document: Value) -> Self {
        Self {
            inner: RwLock::new(Some(document)),
            ..Self::default()
        }
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    pub fn write_count(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }

    pub async fn snapshot(&self) -> Option<Value> {
        self.inner.read().await.clone()
    }
}

#[async_trait::async_trait]
impl DocumentStore for InMemoryDocumentStore {
    async fn read(&self) -> Result<Option<Value>, DocumentStoreError> {
        if self.is_offline {
            return Err(DocumentStoreError::Backend("Document store offline".into()));
        }
        Ok(self.inner.read().await.clone())
    }

    async fn write(&self, document: &Value) -> Result<(), DocumentStoreError> {
        if self.is_offline {
            return Err(DocumentStoreError::Backend("Document store offline".into()));
        }
        *self.inner.write().await = Some(document.clone());
        self.writes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}
