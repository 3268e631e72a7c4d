//! Catalog error types.

use thiserror::Error;

/// Errors raised while turning raw listing data into typed listings.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// Slug is empty or cannot be placed in a URL path segment.
    #[error("Invalid slug: {0:?}")]
    InvalidSlug(String),

    /// A price field holds a negative amount.
    #[error("Negative {field}: {amount}")]
    NegativePrice { field: &'static str, amount: i64 },

    /// Release date could not be parsed.
    #[error("Invalid release date: {0}")]
    InvalidReleaseDate(String),

    /// Currency code is not supported.
    #[error("Unknown currency: {0}")]
    UnknownCurrency(String),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<serde_json::Error> for CatalogError {
    fn from(e: serde_json::Error) -> Self {
        CatalogError::SerializationError(e.to_string())
    }
}
