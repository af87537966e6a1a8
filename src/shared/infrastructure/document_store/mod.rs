// Port for whole-document persistence.
//
// Purpose
// - Hold exactly one JSON document. Every read returns all of it, every write replaces all of it.
//
// Boundaries
// - No partial reads or writes, no schema knowledge. Typing and migration happen above this port.

pub mod in_memory;
pub mod json_file;

use async_trait::async_trait;
use serde_json::Value;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DocumentStoreError {
    #[error("could not access document at `{path}`: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed document: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("backend error: {0}")]
    Backend(String),
}

#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// `Ok(None)` when nothing has been written yet.
    async fn read(&self) -> Result<Option<Value>, DocumentStoreError>;
    async fn write(&self, document: &Value) -> Result<(), DocumentStoreError>;
}
