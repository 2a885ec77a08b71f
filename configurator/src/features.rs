//! Feature Projector
//!
//! Features are the display-only checklist shown next to the spec table:
//! no variant overrides, no quick-spec projection, just decode and
//! render, dropping empty values.

use serde::Serialize;
use shared::models::Product;
use shared::value;

use crate::config::Config;

/// Display-ready feature row
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeatureEntry {
    pub label: String,
    pub value: String,
}

/// Feature checklist for a product
pub fn feature_list(product: &Product, config: &Config) -> Vec<FeatureEntry> {
    product
        .features
        .iter()
        .filter(|f| !value::is_empty(&f.value))
        .map(|f| FeatureEntry {
            label: f.label.clone(),
            value: value::display(&f.value, f.kind, &config.yes_label, &config.no_label),
        })
        .collect()
}
