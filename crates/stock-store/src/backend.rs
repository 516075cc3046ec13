//! Durable snapshot backends.
//!
//! The store talks to durable storage through [`SnapshotBackend`], an
//! explicit dependency passed in by the caller. Tests and embedders can
//! substitute [`MemoryBackend`] for the default JSON file.

use std::cell::{Cell, RefCell};
use std::io;
use std::path::{Path, PathBuf};

use stock_model::Product;

use crate::error::{Result, StoreError};
use crate::io::{load_snapshot, save_snapshot};

/// Whole-snapshot durable storage.
///
/// The collection is always read and written as one unit; there is no
/// per-product access at this layer.
pub trait SnapshotBackend {
    /// Read the stored collection. `Ok(None)` means no record exists yet.
    fn load(&self) -> Result<Option<Vec<Product>>>;

    /// Replace the stored collection with `products` as one atomic unit.
    fn persist(&self, products: &[Product]) -> Result<()>;
}

impl<B: SnapshotBackend> SnapshotBackend for &B {
    fn load(&self) -> Result<Option<Vec<Product>>> {
        (**self).load()
    }

    fn persist(&self, products: &[Product]) -> Result<()> {
        (**self).persist(products)
    }
}

/// File-backed snapshot storage: one JSON array per store.
#[derive(Debug, Clone)]
pub struct JsonFileBackend {
    path: PathBuf,
}

impl JsonFileBackend {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SnapshotBackend for JsonFileBackend {
    fn load(&self) -> Result<Option<Vec<Product>>> {
        load_snapshot(&self.path)
    }

    fn persist(&self, products: &[Product]) -> Result<()> {
        save_snapshot(products, &self.path)
    }
}

/// In-memory backend for tests and ephemeral stores.
#[derive(Debug, Default)]
pub struct MemoryBackend {
    stored: RefCell<Option<Vec<Product>>>,
    fail_next_persist: Cell<bool>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with an existing stored collection, as if a previous session
    /// had persisted it.
    pub fn with_products(products: Vec<Product>) -> Self {
        Self {
            stored: RefCell::new(Some(products)),
            fail_next_persist: Cell::new(false),
        }
    }

    /// Make the next `persist` call fail, simulating quota exhaustion.
    pub fn fail_next_persist(&self) {
        self.fail_next_persist.set(true);
    }

    /// The currently stored collection, if any.
    pub fn stored(&self) -> Option<Vec<Product>> {
        self.stored.borrow().clone()
    }
}

impl SnapshotBackend for MemoryBackend {
    fn load(&self) -> Result<Option<Vec<Product>>> {
        Ok(self.stored.borrow().clone())
    }

    fn persist(&self, products: &[Product]) -> Result<()> {
        if self.fail_next_persist.take() {
            return Err(StoreError::Io {
                operation: "write",
                path: PathBuf::from("<memory>"),
                source: io::Error::new(io::ErrorKind::QuotaExceeded, "storage quota exhausted"),
            });
        }
        *self.stored.borrow_mut() = Some(products.to_vec());
        Ok(())
    }
}
