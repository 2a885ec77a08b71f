//! Override Conflict Audit
//!
//! Overrides are keyed by parameter label, so two unrelated variant
//! groups can silently compete for the same label with the higher-order
//! group winning. Resolution stays last-writer-wins; this advisory pass
//! only surfaces the collisions so catalog data can be fixed.

use std::collections::HashMap;

use shared::models::Product;

/// A parameter label overridden by options in more than one group
#[derive(Debug, Clone, PartialEq)]
pub struct OverrideConflict {
    pub label: String,
    /// Names of the competing groups, in resolution order
    pub groups: Vec<String>,
}

/// Scan a product definition for cross-group override collisions.
///
/// Considers every option, not just selected ones: a collision is a data
/// problem regardless of the current selection. Conflicts are logged at
/// `warn` and returned sorted by label.
pub fn audit_overrides(product: &Product) -> Vec<OverrideConflict> {
    let mut by_label: HashMap<&str, Vec<&str>> = HashMap::new();
    for group in product.groups_by_order() {
        for option in &group.options {
            for label in option.parameter_overrides.keys() {
                let groups = by_label.entry(label.as_str()).or_default();
                if !groups.contains(&group.name.as_str()) {
                    groups.push(group.name.as_str());
                }
            }
        }
    }

    let mut conflicts: Vec<OverrideConflict> = by_label
        .into_iter()
        .filter(|(_, groups)| groups.len() > 1)
        .map(|(label, groups)| OverrideConflict {
            label: label.to_string(),
            groups: groups.iter().map(|g| g.to_string()).collect(),
        })
        .collect();
    conflicts.sort_by(|a, b| a.label.cmp(&b.label));

    for conflict in &conflicts {
        tracing::warn!(
            "Override conflict on '{}': groups {:?} compete; the last in order wins",
            conflict.label,
            conflict.groups
        );
    }

    conflicts
}
