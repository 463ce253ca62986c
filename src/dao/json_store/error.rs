//! Error types for the flat-file JSON store.

use std::path::PathBuf;
use thiserror::Error;

use crate::dao::storage::StorageError;

/// Convenient result alias returning [`JsonStoreError`] failures.
pub type JsonStoreResult<T> = Result<T, JsonStoreError>;

/// Failures that can occur while reading or writing the store files.
#[derive(Debug, Error)]
pub enum JsonStoreError {
    /// A store file could not be read.
    #[error("failed to read store file `{path}`")]
    Read {
        /// File that failed to read.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },
    /// A store file could not be written.
    #[error("failed to write store file `{path}`")]
    Write {
        /// File that failed to write.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },
    /// A store file held content that is not valid JSON for its document type.
    #[error("failed to decode store file `{path}`")]
    Decode {
        /// File holding the malformed document.
        path: PathBuf,
        /// Underlying decode failure.
        #[source]
        source: serde_json::Error,
    },
    /// A document could not be serialized before writing.
    #[error("failed to encode store document")]
    Encode {
        /// Underlying encode failure.
        #[source]
        source: serde_json::Error,
    },
}

impl From<JsonStoreError> for StorageError {
    fn from(err: JsonStoreError) -> Self {
        StorageError::unavailable(err.to_string(), err)
    }
}
