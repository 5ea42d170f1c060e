//! HTTP client for the catalog API.

use storefront_core::settings::API_URL;
use storefront_products::Product;

use crate::error::FetchError;
use crate::parse::parse_catalog;

/// Anything that can produce the startup catalog.
///
/// The application shell only talks to this trait, so a canned catalog (or a
/// canned failure) can stand in for the network.
pub trait CatalogSource {
    /// Load the catalog once. No retries.
    fn fetch(&self) -> Result<Vec<Product>, FetchError>;

    /// Load the catalog, degrading any failure to an empty catalog.
    fn fetch_or_empty(&self) -> Vec<Product> {
        self.fetch().unwrap_or_else(|error| {
            tracing::warn!(%error, "catalog fetch failed; continuing with an empty catalog");
            Vec::new()
        })
    }
}

/// Blocking client for `GET <api_url>`.
#[derive(Debug, Clone)]
pub struct HttpCatalogClient {
    api_url: String,
}

impl HttpCatalogClient {
    pub fn new(api_url: impl Into<String>) -> Self {
        Self {
            api_url: api_url.into(),
        }
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }
}

impl Default for HttpCatalogClient {
    fn default() -> Self {
        Self::new(API_URL)
    }
}

impl CatalogSource for HttpCatalogClient {
    fn fetch(&self) -> Result<Vec<Product>, FetchError> {
        tracing::info!(url = %self.api_url, "fetching catalog");

        let client = reqwest::blocking::Client::builder()
            .build()
            .map_err(FetchError::Network)?;

        let resp = client
            .get(&self.api_url)
            .send()
            .map_err(FetchError::Network)?;

        let status = resp.status();
        if status.is_client_error() || status.is_server_error() {
            return Err(FetchError::Status(status.as_u16()));
        }

        let body = resp.bytes().map_err(FetchError::Body)?;
        let products = parse_catalog(&body)?;

        tracing::info!(count = products.len(), "catalog loaded");
        Ok(products)
    }
}

/// Fetch the catalog from the fixed endpoint, surfacing failures.
pub fn try_fetch_catalog() -> Result<Vec<Product>, FetchError> {
    HttpCatalogClient::default().fetch()
}

/// Fetch the catalog from the fixed endpoint; any failure yields an empty list.
pub fn fetch_catalog() -> Vec<Product> {
    HttpCatalogClient::default().fetch_or_empty()
}
