//! Backup codec error types.

use std::path::PathBuf;
use thiserror::Error;

/// Failure while rendering or parsing a CSV backup.
///
/// Parse errors identify the offending line (1-based, counting the header)
/// so the user can fix the file by hand.
#[derive(Debug, Error)]
pub enum BackupError {
    /// File I/O error.
    #[error("failed to {operation} backup file: {path}")]
    Io {
        operation: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file has no usable header row.
    #[error("backup file has no header row")]
    MissingHeader,

    /// A required column is not declared in the header.
    #[error("backup header is missing the {column:?} column")]
    MissingColumn { column: &'static str },

    /// A numeric column holds text that is not a non-negative integer.
    #[error("line {line}: {column:?} must be a non-negative integer, got {value:?}")]
    InvalidNumber {
        line: u64,
        column: &'static str,
        value: String,
    },

    /// The underlying CSV record could not be read.
    #[error("line {line}: malformed row")]
    Malformed {
        line: u64,
        #[source]
        source: csv::Error,
    },

    /// CSV rendering failed.
    #[error("failed to render backup")]
    Render {
        #[source]
        source: csv::Error,
    },
}

/// Result type alias for backup operations.
pub type Result<T> = std::result::Result<T, BackupError>;
