//! CSV backup and restore for SmartStock product data.
//!
//! # File format
//!
//! The first record is the header `id,name,stock,minStock,barcode`; every
//! following record is one product. Fields containing the delimiter, a
//! quote, or a line break are quoted RFC-4180 style, so any text field
//! survives a backup/restore round trip unchanged.
//!
//! On import the header maps column names to positions, so a file whose
//! columns were reordered by a spreadsheet still restores correctly. All
//! five columns must be declared; unknown extra columns are ignored.
//!
//! # All-or-nothing restore
//!
//! [`parse_backup`] validates the entire file before returning: the caller
//! receives either the complete collection or the first error (with its
//! line number), never a partial result. Handing the parsed collection to
//! the store is the caller's second, separate step.

mod error;
mod export;
mod import;

pub use error::{BackupError, Result};
pub use export::{render_backup, write_backup, write_backup_file};
pub use import::{parse_backup, read_backup_file};

/// Backup column order: fixed on export, resolved by name on import.
pub const BACKUP_HEADER: [&str; 5] = ["id", "name", "stock", "minStock", "barcode"];
