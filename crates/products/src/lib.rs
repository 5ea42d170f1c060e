//! Products domain module.
//!
//! This crate contains the product entity and the catalog filter, implemented
//! purely as deterministic domain logic (no IO, no HTTP, no storage).

pub mod catalog;
pub mod filter;
pub mod listing;
pub mod product;

pub use catalog::{Catalog, FilteredView};
pub use filter::filter;
pub use listing::{EMPTY_LISTING, listing_line, listing_lines};
pub use product::{Price, Product, ProductId, ProductRecord};
