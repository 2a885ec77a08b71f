//! Selection Store
//!
//! The only stateful piece of the engine: the chosen option id per
//! variant group. Seeded from the default rule when a product is loaded,
//! mutated one group at a time by user action, never persisted.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use shared::models::{Product, VariantGroup, VariantOption};

/// Current chosen option id per variant group id
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    chosen: HashMap<String, String>,
}

impl Selection {
    /// Seed a selection for a freshly loaded product.
    ///
    /// Every group gets exactly one entry: the option marked
    /// `is_default`, or the first option when none is marked.
    pub fn initialize(product: &Product) -> Self {
        let chosen = product
            .variant_groups
            .iter()
            .filter_map(|g| g.default_option().map(|o| (g.id.clone(), o.id.clone())))
            .collect();
        Self { chosen }
    }

    /// Choose an option for a group.
    ///
    /// Does not check that the option belongs to the group; feeding a
    /// foreign option id is a caller defect and leaves the group
    /// contributing nothing to resolution.
    pub fn select(&mut self, group_id: &str, option_id: &str) {
        self.chosen
            .insert(group_id.to_string(), option_id.to_string());
    }

    /// Functional-style update returning the new selection
    pub fn with(mut self, group_id: &str, option_id: &str) -> Self {
        self.select(group_id, option_id);
        self
    }

    /// Chosen option id for a group, if any
    pub fn chosen_option_id(&self, group_id: &str) -> Option<&str> {
        self.chosen.get(group_id).map(String::as_str)
    }

    /// Resolve the selected option within a group.
    ///
    /// Falls back to the group default when the selection carries no
    /// entry for the group (same rule as [`Selection::initialize`]).
    pub fn selected_option<'p>(&self, group: &'p VariantGroup) -> Option<&'p VariantOption> {
        match self.chosen.get(&group.id) {
            Some(option_id) => group.option(option_id),
            None => group.default_option(),
        }
    }
}

/// True when the product has at least one group with at least one option
pub fn has_variants(product: &Product) -> bool {
    product.variant_groups.iter().any(|g| !g.options.is_empty())
}
