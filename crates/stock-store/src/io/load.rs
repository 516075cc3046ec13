//! Snapshot loading operations.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use stock_model::Product;

use crate::error::{Result, StoreError};

/// Load a product collection from a JSON snapshot file.
///
/// Returns `Ok(None)` when no snapshot exists yet (first run). Unreadable or
/// malformed content is an error; the store treats it as a recoverable
/// condition and falls back to an empty collection.
pub fn load_snapshot(path: &Path) -> Result<Option<Vec<Product>>> {
    let bytes = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
        Err(e) => {
            return Err(StoreError::Io {
                operation: "read",
                path: path.to_path_buf(),
                source: e,
            });
        }
    };

    let products: Vec<Product> =
        serde_json::from_slice(&bytes).map_err(|e| StoreError::Deserialize { source: e })?;

    tracing::debug!(count = products.len(), "loaded snapshot from {}", path.display());
    Ok(Some(products))
}
