//! Read-only derivations over a product snapshot.
//!
//! Everything here is a pure function recomputed on demand; the snapshot
//! itself is the only cache. Barcode lookup stays on the store, which owns
//! the first-match-in-order contract.

use stock_model::Product;

/// Aggregate counts for a snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StockTotals {
    /// Number of products.
    pub count: usize,
    /// Sum of all stock counts. Wide enough that no collection of `u32`
    /// quantities can overflow it.
    pub total_stock: u64,
}

/// Every product at or below its minimum stock threshold, in snapshot order.
///
/// The boundary is inclusive: `stock == min_stock` counts as low stock.
pub fn low_stock(products: &[Product]) -> Vec<&Product> {
    products.iter().filter(|p| p.is_low_stock()).collect()
}

/// Product count and total stock for a snapshot.
pub fn totals(products: &[Product]) -> StockTotals {
    StockTotals {
        count: products.len(),
        total_stock: products.iter().map(|p| u64::from(p.stock)).sum(),
    }
}

/// Top `n` products by stock, descending.
///
/// The sort is stable, so products with equal stock keep their snapshot
/// order.
pub fn top_n_by_stock(products: &[Product], n: usize) -> Vec<&Product> {
    let mut ranked: Vec<&Product> = products.iter().collect();
    ranked.sort_by(|a, b| b.stock.cmp(&a.stock));
    ranked.truncate(n);
    ranked
}

/// Products matching a search term, in snapshot order.
///
/// Matches case-insensitively against the name and by plain substring
/// against the barcode. An empty term matches every product.
pub fn search<'a>(products: &'a [Product], term: &str) -> Vec<&'a Product> {
    let needle = term.to_lowercase();
    products
        .iter()
        .filter(|p| p.name.to_lowercase().contains(&needle) || p.barcode.contains(term))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: &str, name: &str, stock: u32, min_stock: u32, barcode: &str) -> Product {
        Product {
            id: id.to_string(),
            name: name.to_string(),
            stock,
            min_stock,
            barcode: barcode.to_string(),
        }
    }

    #[test]
    fn low_stock_includes_the_boundary() {
        let products = vec![
            product("1", "At threshold", 10, 10, ""),
            product("2", "Below", 3, 10, ""),
            product("3", "Above", 11, 10, ""),
        ];

        let low: Vec<&str> = low_stock(&products).iter().map(|p| p.id.as_str()).collect();
        assert_eq!(low, vec!["1", "2"]);
    }

    #[test]
    fn totals_count_and_sum_match_the_snapshot() {
        let products = vec![
            product("1", "Widget", 5, 10, "111"),
            product("2", "Gadget", 20, 5, "222"),
        ];

        let totals = totals(&products);
        assert_eq!(totals.count, products.len());
        assert_eq!(totals.total_stock, 25);
    }

    #[test]
    fn totals_of_empty_snapshot_are_zero() {
        assert_eq!(
            totals(&[]),
            StockTotals {
                count: 0,
                total_stock: 0
            }
        );
    }

    #[test]
    fn top_n_sorts_descending_and_truncates() {
        let products = vec![
            product("1", "Low", 1, 0, ""),
            product("2", "High", 30, 0, ""),
            product("3", "Mid", 10, 0, ""),
        ];

        let top: Vec<&str> = top_n_by_stock(&products, 2)
            .iter()
            .map(|p| p.id.as_str())
            .collect();
        assert_eq!(top, vec!["2", "3"]);
    }

    #[test]
    fn top_n_ties_keep_snapshot_order() {
        let products = vec![
            product("1", "First", 7, 0, ""),
            product("2", "Second", 7, 0, ""),
            product("3", "Third", 7, 0, ""),
        ];

        let top: Vec<&str> = top_n_by_stock(&products, 3)
            .iter()
            .map(|p| p.id.as_str())
            .collect();
        assert_eq!(top, vec!["1", "2", "3"]);
    }

    #[test]
    fn top_n_with_large_n_returns_everything() {
        let products = vec![product("1", "Only", 1, 0, "")];
        assert_eq!(top_n_by_stock(&products, 10).len(), 1);
    }

    #[test]
    fn search_matches_name_case_insensitively() {
        let products = vec![
            product("1", "USB Cable", 5, 0, "444"),
            product("2", "Charger", 5, 0, "555"),
        ];

        let hits: Vec<&str> = search(&products, "usb")
            .iter()
            .map(|p| p.id.as_str())
            .collect();
        assert_eq!(hits, vec!["1"]);
    }

    #[test]
    fn search_matches_barcode_substring() {
        let products = vec![
            product("1", "USB Cable", 5, 0, "4407"),
            product("2", "Charger", 5, 0, "5440"),
        ];

        let hits: Vec<&str> = search(&products, "44")
            .iter()
            .map(|p| p.id.as_str())
            .collect();
        assert_eq!(hits, vec!["1", "2"]);
    }

    #[test]
    fn empty_search_term_matches_everything() {
        let products = vec![
            product("1", "Widget", 5, 10, "111"),
            product("2", "Gadget", 20, 5, "222"),
        ];
        assert_eq!(search(&products, "").len(), 2);
    }
}
