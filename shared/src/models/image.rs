//! Image Model

use serde::{Deserialize, Serialize};

/// Gallery image, attached to a product or to a variant option
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Image {
    pub id: String,
    pub url: String,
    #[serde(default)]
    pub alt: String,
    /// Preferred hero within its gallery
    #[serde(default)]
    pub is_hero: bool,
}
