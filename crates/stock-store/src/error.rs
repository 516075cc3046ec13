//! Store error types.
//!
//! Durable-write failures are surfaced to the caller as distinct error
//! conditions; read failures at startup are handled inside
//! [`ProductStore::open`](crate::ProductStore::open) and never reach callers.

use std::path::PathBuf;
use thiserror::Error;

/// Storage operation error.
#[derive(Debug, Error)]
pub enum StoreError {
    /// File I/O error.
    #[error("failed to {operation} file: {path}")]
    Io {
        operation: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Atomic write failed (temp file couldn't be renamed).
    #[error("failed to complete save operation")]
    AtomicWriteFailed {
        temp_path: PathBuf,
        target_path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Serialization error.
    #[error("failed to serialize product data")]
    Serialize {
        #[source]
        source: serde_json::Error,
    },

    /// Deserialization error.
    #[error("failed to deserialize product data")]
    Deserialize {
        #[source]
        source: serde_json::Error,
    },
}

impl StoreError {
    /// Get a user-friendly message for this error.
    pub fn user_message(&self) -> String {
        match self {
            Self::Io {
                operation, path, ..
            } => {
                format!("Could not {} the data file at {}", operation, path.display())
            }
            Self::AtomicWriteFailed { target_path, .. } => {
                format!(
                    "Could not save the data file to {}. Check disk space and permissions.",
                    target_path.display()
                )
            }
            Self::Serialize { .. } => "An error occurred while saving product data.".to_string(),
            Self::Deserialize { .. } => {
                "The data file could not be read. It may be corrupted.".to_string()
            }
        }
    }
}

/// Result type alias for storage operations.
pub type Result<T> = std::result::Result<T, StoreError>;
