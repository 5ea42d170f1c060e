//! Typed parse of the catalog envelope.

use serde::Deserialize;
use serde_json::Value;

use storefront_products::Product;

use crate::error::FetchError;

/// Field of the envelope holding the product array.
const PRODUCTS_FIELD: &str = "products";

/// Parse an API response body into products.
///
/// - Body is not JSON → [`FetchError::Parse`].
/// - Top level is not an object, or has no (or a `null`) `products` field →
///   empty catalog. This is not treated as an error.
/// - Any entry that is missing a field, has a mistyped field or a negative
///   price fails the whole payload; entries are never skipped one by one.
pub fn parse_catalog(body: &[u8]) -> Result<Vec<Product>, FetchError> {
    let envelope: Value = serde_json::from_slice(body)?;

    let products = match envelope.get(PRODUCTS_FIELD) {
        None | Some(Value::Null) => return Ok(Vec::new()),
        Some(products) => products,
    };

    Ok(Vec::<Product>::deserialize(products)?)
}
