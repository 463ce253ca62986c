use std::error::Error;
use thiserror::Error;

/// Result alias for durable store operations.
pub type StorageResult<T> = Result<T, StorageError>;

/// Error raised by store backends regardless of the underlying medium.
///
/// Callers inside the core treat every variant as transient: caches keep
/// serving their last-known contents and the supervisors retry on the next
/// scheduled cycle.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The backing medium could not be read or written.
    #[error("store unavailable: {message}")]
    Unavailable {
        /// Human readable description of the failed operation.
        message: String,
        /// Underlying backend failure.
        #[source]
        source: Box<dyn Error + Send + Sync>,
    },
}

impl StorageError {
    /// Wrap any backend failure into an unavailable error.
    pub fn unavailable(
        message: impl Into<String>,
        source: impl Error + Send + Sync + 'static,
    ) -> Self {
        StorageError::Unavailable {
            message: message.into(),
            source: Box::new(source),
        }
    }
}
