//! Catalog filter.

use crate::product::Product;

/// Select the products whose title or category contains `query`.
///
/// Matching is case-insensitive substring matching; the query is lower-cased
/// but not trimmed, so surrounding whitespace is matched literally. An empty
/// query keeps every product. Catalog order is preserved.
pub fn filter(catalog: &[Product], query: &str) -> Vec<Product> {
    let needle = query.to_lowercase();
    if needle.is_empty() {
        return catalog.to_vec();
    }

    catalog
        .iter()
        .filter(|product| product.matches_lowercase(&needle))
        .cloned()
        .collect()
}
