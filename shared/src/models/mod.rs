//! Data models
//!
//! Product definitions as delivered by the catalog: base pricing,
//! galleries, parameter/feature instances and variant groups. All IDs
//! are `String`. Values stored on parameters and features are
//! codec-encoded scalars (see [`crate::value`]).

pub mod image;
pub mod parameter;
pub mod product;
pub mod section;
pub mod variant;

// Re-exports
pub use image::*;
pub use parameter::*;
pub use product::*;
pub use section::*;
pub use variant::*;
