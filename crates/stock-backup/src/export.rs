//! Backup rendering.

use std::fs::File;
use std::io;
use std::path::Path;

use stock_model::Product;

use crate::BACKUP_HEADER;
use crate::error::{BackupError, Result};

/// Write the collection as CSV to `writer`.
///
/// Output is deterministic given a fixed collection order: the fixed header
/// first, then one record per product.
pub fn write_backup<W: io::Write>(products: &[Product], writer: W) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer
        .write_record(BACKUP_HEADER)
        .map_err(|e| BackupError::Render { source: e })?;
    for product in products {
        let stock = product.stock.to_string();
        let min_stock = product.min_stock.to_string();
        csv_writer
            .write_record([
                product.id.as_str(),
                product.name.as_str(),
                stock.as_str(),
                min_stock.as_str(),
                product.barcode.as_str(),
            ])
            .map_err(|e| BackupError::Render { source: e })?;
    }
    csv_writer
        .flush()
        .map_err(|e| BackupError::Render { source: e.into() })?;
    Ok(())
}

/// Render the collection as CSV text.
pub fn render_backup(products: &[Product]) -> Result<String> {
    let mut buffer = Vec::new();
    write_backup(products, &mut buffer)?;
    Ok(String::from_utf8_lossy(&buffer).into_owned())
}

/// Write the collection as a CSV backup file at `path`.
pub fn write_backup_file(products: &[Product], path: &Path) -> Result<()> {
    let file = File::create(path).map_err(|e| BackupError::Io {
        operation: "create",
        path: path.to_path_buf(),
        source: e,
    })?;
    write_backup(products, file)?;
    tracing::debug!(count = products.len(), "wrote backup to {}", path.display());
    Ok(())
}
