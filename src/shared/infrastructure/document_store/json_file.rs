// Single-file JSON adapter for the DocumentStore port.
//
// Writes go to a sibling temporary file which is synced and then renamed over the
// target, so a later read sees either the previous or the new document, never half of one.

use crate::shared::infrastructure::document_store::{DocumentStore, DocumentStoreError};
use serde_json::Value;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::io::AsyncWriteExt;

#[derive(Debug, Clone)]
pub struct JsonFileDocumentStore {
    path: PathBuf,
}

impl JsonFileDocumentStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_else(|| "document".into());
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    fn io_error(&self, source: std::io::Error) -> DocumentStoreError {
        DocumentStoreError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

#[async_trait::async_trait]
impl DocumentStore for JsonFileDocumentStore {
    async fn read(&self) -> Result<Option<Value>, DocumentStoreError> {
        let bytes = match fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(error) if error.kind() == ErrorKind::NotFound => return Ok(None),
            Err(error) => return Err(self.io_error(error)),
        };
        Ok(Some(serde_json::from_slice(&bytes)?))
    }

    async fn write(&self, document: &Value) -> Result<(), DocumentStoreError> {
        let bytes = serde_json::to_vec_pretty(document)?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| self.io_error(e))?;
        }

        let temp_path = self.temp_path();
        let mut file = fs::File::create(&temp_path)
            .await
            .map_err(|e| self.io_error(e))?;
        file.write_all(&bytes).await.map_err(|e| self.io_error(e))?;
        file.sync_all().await.map_err(|e| self.io_error(e))?;
        drop(file);

        fs::rename(&temp_path, &self.path)
            .await
            .map_err(|e| self.io_error(e))?;
        tracing::debug!(path = %self.path.display(), bytes = bytes.len(), "document written");
        Ok(())
    }
}
