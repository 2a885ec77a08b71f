//! Variant Group and Option Models

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::image::Image;

/// Variant option (embedded in VariantGroup)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VariantOption {
    pub id: String,
    pub name: String,
    /// Price modifier in currency units (positive=add, negative=subtract)
    #[serde(default)]
    pub price_modifier: f64,
    /// At most one per group; if none is marked, the first option is default
    #[serde(default)]
    pub is_default: bool,
    /// Own gallery override; empty means the option supplies no images
    #[serde(default)]
    pub images: Vec<Image>,
    /// Parameter label -> raw display-formatted replacement value
    #[serde(default)]
    pub parameter_overrides: HashMap<String, String>,
}

/// Variant group entity
///
/// A named axis of configuration offering mutually exclusive options.
/// Invariant: a group always has at least one option.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VariantGroup {
    pub id: String,
    pub name: String,
    /// Resolution precedence (ascending; later groups shadow earlier ones)
    #[serde(default)]
    pub order: i32,
    pub options: Vec<VariantOption>,
}

impl VariantGroup {
    /// The option seeded on initialization: `is_default` if marked, else the first
    pub fn default_option(&self) -> Option<&VariantOption> {
        self.options
            .iter()
            .find(|o| o.is_default)
            .or_else(|| self.options.first())
    }

    /// Look up an option by id
    pub fn option(&self, option_id: &str) -> Option<&VariantOption> {
        self.options.iter().find(|o| o.id == option_id)
    }
}
