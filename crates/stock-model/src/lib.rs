pub mod product;

pub use product::{Product, ProductDraft};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn product_serializes_with_camel_case_keys() {
        let product = Product {
            id: "1".to_string(),
            name: "Widget".to_string(),
            stock: 5,
            min_stock: 10,
            barcode: "111".to_string(),
        };
        let json = serde_json::to_value(&product).expect("serialize product");
        assert_eq!(json["minStock"], 10);
        assert!(json.get("min_stock").is_none());

        let round: Product = serde_json::from_value(json).expect("deserialize product");
        assert_eq!(round, product);
    }

    #[test]
    fn draft_becomes_product_with_assigned_id() {
        let draft = ProductDraft {
            name: "Gadget".to_string(),
            stock: 20,
            min_stock: 5,
            barcode: "222".to_string(),
        };
        let product = draft.clone().into_product("42".to_string());
        assert_eq!(product.id, "42");
        assert_eq!(product.name, draft.name);
        assert_eq!(product.stock, draft.stock);
        assert_eq!(product.min_stock, draft.min_stock);
        assert_eq!(product.barcode, draft.barcode);
    }

    #[test]
    fn low_stock_boundary_is_inclusive() {
        let mut product = Product {
            id: "1".to_string(),
            name: "Widget".to_string(),
            stock: 10,
            min_stock: 10,
            barcode: String::new(),
        };
        assert!(product.is_low_stock());
        product.stock = 11;
        assert!(!product.is_low_stock());
    }
}
