//! `storefront-catalog`
//!
//! **Responsibility:** load the product catalog from the remote API.
//!
//! One blocking GET, one typed parse step, no retries and no caching. Callers
//! that cannot act on the failure use [`fetch_catalog`], which degrades to an
//! empty catalog.

pub mod client;
pub mod error;
pub mod parse;

pub use client::{CatalogSource, HttpCatalogClient, fetch_catalog, try_fetch_catalog};
pub use error::FetchError;
pub use parse::parse_catalog;
