use serde::{Deserialize, Serialize};

use storefront_core::{DomainError, DomainResult, Entity, ValueObject};

/// Product identifier, unique within one catalog snapshot.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub i64);

impl ProductId {
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl core::fmt::Display for ProductId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

/// Unit price as published by the catalog API (always finite and non-negative).
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd)]
pub struct Price(f64);

impl Price {
    pub fn new(amount: f64) -> DomainResult<Self> {
        if !amount.is_finite() {
            return Err(DomainError::validation(format!(
                "price must be a finite number, got {amount}"
            )));
        }
        if amount < 0.0 {
            return Err(DomainError::validation(format!(
                "price must not be negative, got {amount}"
            )));
        }
        Ok(Self(amount))
    }

    pub fn amount(&self) -> f64 {
        self.0
    }

    /// Currency-prefixed amount with exactly two decimals (`$399.99`).
    pub fn to_currency(&self) -> String {
        format!("${:.2}", self.0)
    }
}

impl ValueObject for Price {}

impl core::fmt::Display for Price {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

/// Wire shape of a product entry inside the API envelope.
///
/// Only the four fields the application uses are read; anything else the API
/// sends is ignored. Conversion into [`Product`] validates the values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductRecord {
    pub id: i64,
    pub title: String,
    pub price: f64,
    pub category: String,
}

/// A catalog entry. Immutable once built: fields are only exposed read-only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ProductRecord", into = "ProductRecord")]
pub struct Product {
    id: ProductId,
    title: String,
    price: Price,
    category: String,
}

impl Product {
    pub fn new(
        id: ProductId,
        title: impl Into<String>,
        price: Price,
        category: impl Into<String>,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            price,
            category: category.into(),
        }
    }

    pub fn id_typed(&self) -> ProductId {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn price(&self) -> Price {
        self.price
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    /// Case-insensitive substring match on title or category.
    ///
    /// `needle` must already be lower-cased.
    pub fn matches_lowercase(&self, needle: &str) -> bool {
        self.title.to_lowercase().contains(needle) || self.category.to_lowercase().contains(needle)
    }
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

impl TryFrom<ProductRecord> for Product {
    type Error = DomainError;

    fn try_from(record: ProductRecord) -> Result<Self, Self::Error> {
        let price = Price::new(record.price)?;
        Ok(Self::new(
            ProductId::new(record.id),
            record.title,
            price,
            record.category,
        ))
    }
}

impl From<Product> for ProductRecord {
    fn from(product: Product) -> Self {
        Self {
            id: product.id.value(),
            title: product.title,
            price: product.price.amount(),
            category: product.category,
        }
    }
}
