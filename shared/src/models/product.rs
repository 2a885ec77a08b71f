//! Product Model

use serde::{Deserialize, Serialize};

use super::image::Image;
use super::parameter::{FeatureInstance, ParameterInstance};
use super::section::{Download, Section};
use super::variant::VariantGroup;

/// Product entity
///
/// The full static definition as delivered by the catalog. Immutable for
/// the duration of a configuration session; the engine only reads it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub name: String,
    /// Base price in currency units, before variant modifiers
    #[serde(default)]
    pub base_price: f64,
    /// Base gallery
    #[serde(default)]
    pub images: Vec<Image>,
    /// Designated hero image within the base gallery
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hero_image_id: Option<String>,
    #[serde(default)]
    pub parameters: Vec<ParameterInstance>,
    #[serde(default)]
    pub features: Vec<FeatureInstance>,
    #[serde(default)]
    pub variant_groups: Vec<VariantGroup>,
    #[serde(default)]
    pub sections: Vec<Section>,
    #[serde(default)]
    pub downloads: Vec<Download>,
}

impl Product {
    /// Variant groups in resolution order (ascending `order`, source order on ties)
    pub fn groups_by_order(&self) -> Vec<&VariantGroup> {
        let mut groups: Vec<&VariantGroup> = self.variant_groups.iter().collect();
        groups.sort_by_key(|g| g.order);
        groups
    }
}
