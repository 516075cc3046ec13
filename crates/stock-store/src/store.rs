//! The authoritative product collection and its operations.

use stock_model::{Product, ProductDraft};
use tracing::warn;

use crate::backend::SnapshotBackend;
use crate::error::Result;

/// In-memory product collection backed by whole-snapshot persistence.
///
/// Every mutator builds the candidate collection, persists it through the
/// backend, and only then replaces the in-memory snapshot. A rejected
/// durable write leaves the store exactly as it was and surfaces the error
/// to the caller.
///
/// Products keep insertion order; that order is what `products()` and the
/// barcode lookup iterate in.
#[derive(Debug)]
pub struct ProductStore<B: SnapshotBackend> {
    backend: B,
    products: Vec<Product>,
    next_id: u64,
}

impl<B: SnapshotBackend> ProductStore<B> {
    /// Open a store over `backend`.
    ///
    /// An absent record starts an empty collection. An unreadable or
    /// malformed record is logged and likewise treated as empty rather than
    /// failing startup.
    pub fn open(backend: B) -> Self {
        let products = match backend.load() {
            Ok(Some(products)) => products,
            Ok(None) => Vec::new(),
            Err(error) => {
                warn!("unreadable snapshot, falling back to an empty collection: {error}");
                Vec::new()
            }
        };
        let next_id = next_id_after(&products);
        Self {
            backend,
            products,
            next_id,
        }
    }

    /// Current snapshot, in insertion order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn get_by_id(&self, id: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// First product whose barcode matches exactly, in collection order.
    ///
    /// Barcodes are not unique; duplicates after the first match are
    /// unreachable through this lookup.
    pub fn get_by_barcode(&self, barcode: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.barcode == barcode)
    }

    /// Create a product from `draft`, assign it a fresh id, and persist.
    ///
    /// Ids are monotonic decimal strings seeded past every numeric id seen
    /// at load time, so a freshly assigned id cannot collide with an
    /// existing one.
    pub fn add(&mut self, draft: ProductDraft) -> Result<Product> {
        let id = self.next_id.to_string();
        debug_assert!(self.get_by_id(&id).is_none(), "id counter out of sync");
        let product = draft.into_product(id);

        let mut candidate = self.products.clone();
        candidate.push(product.clone());
        self.backend.persist(&candidate)?;
        self.products = candidate;
        self.next_id += 1;
        Ok(product)
    }

    /// Replace the entry whose id matches `product.id`.
    ///
    /// Returns `Ok(false)` without touching storage when no entry matches;
    /// the store never inserts here.
    pub fn update(&mut self, product: Product) -> Result<bool> {
        let Some(index) = self.products.iter().position(|p| p.id == product.id) else {
            return Ok(false);
        };
        let mut candidate = self.products.clone();
        candidate[index] = product;
        self.backend.persist(&candidate)?;
        self.products = candidate;
        Ok(true)
    }

    /// Add `delta` to a product's stock count, saturating at zero.
    ///
    /// Returns the updated product, or `Ok(None)` as a no-op when the id is
    /// unknown.
    pub fn adjust_stock(&mut self, id: &str, delta: i64) -> Result<Option<Product>> {
        let Some(index) = self.products.iter().position(|p| p.id == id) else {
            return Ok(None);
        };
        let mut candidate = self.products.clone();
        let stock = i64::from(candidate[index].stock).saturating_add(delta);
        candidate[index].stock = stock.clamp(0, i64::from(u32::MAX)) as u32;
        let updated = candidate[index].clone();
        self.backend.persist(&candidate)?;
        self.products = candidate;
        Ok(Some(updated))
    }

    /// Remove the entry with matching id. `Ok(false)` no-op when absent.
    pub fn delete(&mut self, id: &str) -> Result<bool> {
        let Some(index) = self.products.iter().position(|p| p.id == id) else {
            return Ok(false);
        };
        let mut candidate = self.products.clone();
        candidate.remove(index);
        self.backend.persist(&candidate)?;
        self.products = candidate;
        Ok(true)
    }

    /// Drop every product and persist the empty collection.
    ///
    /// Unconditional; confirming the operation is the caller's job.
    pub fn clear_all(&mut self) -> Result<()> {
        self.backend.persist(&[])?;
        self.products.clear();
        Ok(())
    }

    /// Replace the whole collection with `products`, verbatim.
    ///
    /// No merge and no revalidation; the previous collection is discarded.
    /// The id counter is re-seeded from the imported ids.
    pub fn import_all(&mut self, products: Vec<Product>) -> Result<()> {
        self.backend.persist(&products)?;
        self.products = products;
        self.next_id = next_id_after(&self.products);
        Ok(())
    }
}

/// Smallest counter value that cannot collide with any numeric id present.
fn next_id_after(products: &[Product]) -> u64 {
    products
        .iter()
        .filter_map(|p| p.id.parse::<u64>().ok())
        .max()
        .map_or(1, |max| max.saturating_add(1))
}
