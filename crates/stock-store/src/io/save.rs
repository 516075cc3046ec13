//! Snapshot saving operations.

use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

use stock_model::Product;

use crate::error::{Result, StoreError};

/// Save the full product collection to a JSON snapshot file.
///
/// Uses atomic write (temp file + rename) so a crash or power loss mid-save
/// cannot leave a truncated data file behind.
pub fn save_snapshot(products: &[Product], path: &Path) -> Result<()> {
    let bytes =
        serde_json::to_vec_pretty(products).map_err(|e| StoreError::Serialize { source: e })?;

    // Write to a temp file first, then rename for atomicity
    let temp_path = path.with_extension("json.tmp");

    // Create parent directory if needed
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|e| StoreError::Io {
                operation: "create directory",
                path: parent.to_path_buf(),
                source: e,
            })?;
        }
    }

    let mut file = File::create(&temp_path).map_err(|e| StoreError::Io {
        operation: "create",
        path: temp_path.clone(),
        source: e,
    })?;

    file.write_all(&bytes).map_err(|e| StoreError::Io {
        operation: "write",
        path: temp_path.clone(),
        source: e,
    })?;

    file.sync_all().map_err(|e| StoreError::Io {
        operation: "sync",
        path: temp_path.clone(),
        source: e,
    })?;

    // Atomic rename
    fs::rename(&temp_path, path).map_err(|e| StoreError::AtomicWriteFailed {
        temp_path: temp_path.clone(),
        target_path: path.to_path_buf(),
        source: e,
    })?;

    tracing::debug!(count = products.len(), "saved snapshot to {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn widget() -> Product {
        Product {
            id: "1".to_string(),
            name: "Widget".to_string(),
            stock: 5,
            min_stock: 10,
            barcode: "111".to_string(),
        }
    }

    #[test]
    fn save_writes_json_array() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("products.json");

        save_snapshot(&[widget()], &path).unwrap();

        assert!(path.exists());
        let text = fs::read_to_string(&path).unwrap();
        assert!(text.trim_start().starts_with('['));
        assert!(text.contains("\"minStock\""));
    }

    #[test]
    fn save_creates_parent_directories() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested/dir/products.json");

        save_snapshot(&[widget()], &path).unwrap();

        assert!(path.exists());
    }

    #[test]
    fn save_leaves_no_temp_file_behind() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("products.json");

        save_snapshot(&[widget()], &path).unwrap();

        assert!(!path.with_extension("json.tmp").exists());
    }
}
