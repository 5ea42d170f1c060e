//! Catalog snapshot and the filtered view derived from it.

use std::sync::Arc;

use crate::filter::filter;
use crate::product::Product;

/// The full, unfiltered product list loaded once at startup.
///
/// Cloning is cheap and shares the same immutable snapshot.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    products: Arc<[Product]>,
}

impl Catalog {
    pub fn new(products: Vec<Product>) -> Self {
        Self {
            products: products.into(),
        }
    }

    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::empty()
    }
}

impl From<Vec<Product>> for Catalog {
    fn from(products: Vec<Product>) -> Self {
        Self::new(products)
    }
}

/// The subset of a [`Catalog`] matching one query.
///
/// A view is never edited: every query change computes a fresh one from the
/// catalog, and the previous view is dropped.
#[derive(Debug, Clone, PartialEq)]
pub struct FilteredView {
    query: String,
    products: Vec<Product>,
    catalog_len: usize,
}

impl FilteredView {
    pub fn compute(catalog: &Catalog, query: &str) -> Self {
        Self {
            query: query.to_string(),
            products: filter(catalog.products(), query),
            catalog_len: catalog.len(),
        }
    }

    /// The unfiltered view (empty query).
    pub fn all(catalog: &Catalog) -> Self {
        Self::compute(catalog, "")
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Size of the catalog this view was computed from.
    pub fn catalog_len(&self) -> usize {
        self.catalog_len
    }
}
