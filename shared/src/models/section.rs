//! Section and Download Models
//!
//! Marketing copy blocks and downloadable documents attached to a product
//! page. Carried in the product definition for completeness; no resolution
//! logic touches them.

use serde::{Deserialize, Serialize};

/// Marketing content section
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Section {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub body: String,
    #[serde(default)]
    pub sort_order: i32,
}

/// Downloadable document (datasheet, manual, CE declaration)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Download {
    pub id: String,
    pub label: String,
    pub url: String,
}
