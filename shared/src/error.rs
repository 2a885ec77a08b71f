//! Unified error type for catalog operations
//!
//! The resolution engine itself never fails: malformed values decode to
//! safe defaults and missing data resolves through fallback chains. The
//! only fallible surface is loading and looking up catalog data.

use thiserror::Error;

/// Catalog error
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Catalog payload could not be parsed
    #[error("Failed to parse catalog data: {message}")]
    Parse { message: String },

    /// Product not found
    #[error("Product not found: {id}")]
    NotFound { id: String },

    /// Product already exists
    #[error("Product already exists: {id}")]
    Duplicate { id: String },
}

impl CatalogError {
    /// Create a Parse error
    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse {
            message: message.into(),
        }
    }

    /// Create a NotFound error
    pub fn not_found(id: impl Into<String>) -> Self {
        Self::NotFound { id: id.into() }
    }

    /// Create a Duplicate error
    pub fn duplicate(id: impl Into<String>) -> Self {
        Self::Duplicate { id: id.into() }
    }
}

impl From<serde_json::Error> for CatalogError {
    fn from(err: serde_json::Error) -> Self {
        Self::parse(err.to_string())
    }
}

/// Result type for catalog operations
pub type CatalogResult<T> = Result<T, CatalogError>;
