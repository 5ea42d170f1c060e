//! Catalog loading errors.

use thiserror::Error;

/// Why the catalog could not be loaded.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The request never completed (DNS, connect, TLS, timeout).
    #[error("network error: {0}")]
    Network(#[source] reqwest::Error),

    /// The API answered with a 4xx/5xx status.
    #[error("API returned HTTP {0}")]
    Status(u16),

    /// The response body could not be read.
    #[error("failed to read response body: {0}")]
    Body(#[source] reqwest::Error),

    /// The body was not JSON, or a product entry was malformed.
    #[error("invalid catalog payload: {0}")]
    Parse(#[from] serde_json::Error),
}
