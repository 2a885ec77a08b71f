//! Shared types for the catalog configurator
//!
//! Data models for products, galleries, parameters and variants,
//! the scalar value codec, and the unified error type. No resolution
//! logic lives here; the `configurator` crate consumes these types.

pub mod error;
pub mod models;
pub mod value;

// Re-exports
pub use serde::{Deserialize, Serialize};

pub use error::{CatalogError, CatalogResult};
pub use value::ValueKind;
