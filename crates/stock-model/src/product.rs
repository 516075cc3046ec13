//! The product entity and its creation draft.

use serde::{Deserialize, Serialize};

/// A tracked inventory item.
///
/// `id` is assigned by the store when the product is created and is never
/// reassigned or reused. `barcode` is a secondary lookup key with no
/// uniqueness guarantee; lookups return the first match in collection order.
///
/// Quantities are unsigned: a product can never hold a negative stock count,
/// so the non-negativity invariant is carried by the type rather than checked
/// after each mutation.
///
/// Serialized field names use camelCase (`minStock`) to match the durable
/// JSON record and the CSV backup header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub name: String,
    pub stock: u32,
    pub min_stock: u32,
    pub barcode: String,
}

impl Product {
    /// A product is low on stock when it is at or below its threshold.
    pub fn is_low_stock(&self) -> bool {
        self.stock <= self.min_stock
    }
}

/// Input for creating a product: a [`Product`] without its `id`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDraft {
    pub name: String,
    pub stock: u32,
    pub min_stock: u32,
    pub barcode: String,
}

impl ProductDraft {
    /// Attach a store-assigned id to this draft.
    pub fn into_product(self, id: String) -> Product {
        Product {
            id,
            name: self.name,
            stock: self.stock,
            min_stock: self.min_stock,
            barcode: self.barcode,
        }
    }
}
