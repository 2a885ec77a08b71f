//! Override Resolver
//!
//! Merges the parameter overrides contributed by every currently
//! selected option, in ascending group order. Later groups win on label
//! collision; shadowing replaces the whole value, never merges. There is
//! no semantic priority beyond group order.

use std::collections::HashMap;

use shared::models::Product;

use crate::selection::Selection;

/// Resolve parameter label -> raw override value for the current selection
pub fn resolve_overrides(product: &Product, selection: &Selection) -> HashMap<String, String> {
    let mut resolved: HashMap<String, String> = HashMap::new();
    for group in product.groups_by_order() {
        if let Some(option) = selection.selected_option(group) {
            for (label, value) in &option.parameter_overrides {
                resolved.insert(label.clone(), value.clone());
            }
        }
    }
    resolved
}

#[cfg(test)]
mod tests {
    use shared::models::{VariantGroup, VariantOption};

    use super::*;

    fn make_option(id: &str, overrides: &[(&str, &str)]) -> VariantOption {
        VariantOption {
            id: id.to_string(),
            name: id.to_string(),
            price_modifier: 0.0,
            is_default: true,
            images: vec![],
            parameter_overrides: overrides
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        }
    }

    fn make_group(id: &str, order: i32, options: Vec<VariantOption>) -> VariantGroup {
        VariantGroup {
            id: id.to_string(),
            name: id.to_string(),
            order,
            options,
        }
    }

    fn make_product(groups: Vec<VariantGroup>) -> Product {
        Product {
            id: "p1".to_string(),
            name: "Excavator".to_string(),
            base_price: 0.0,
            images: vec![],
            hero_image_id: None,
            parameters: vec![],
            features: vec![],
            variant_groups: groups,
            sections: vec![],
            downloads: vec![],
        }
    }

    #[test]
    fn test_no_overrides_yields_empty_map() {
        let product = make_product(vec![make_group(
            "cabin",
            1,
            vec![make_option("std", &[])],
        )]);
        let selection = Selection::initialize(&product);
        assert!(resolve_overrides(&product, &selection).is_empty());
    }

    #[test]
    fn test_selected_option_contributes_its_overrides() {
        let product = make_product(vec![make_group(
            "cabin",
            1,
            vec![make_option("premium", &[("Moc silnika", "30 KM")])],
        )]);
        let selection = Selection::initialize(&product);

        let ov = resolve_overrides(&product, &selection);
        assert_eq!(ov.get("Moc silnika").map(String::as_str), Some("30 KM"));
    }

    #[test]
    fn test_later_group_wins_on_label_collision() {
        let product = make_product(vec![
            make_group("a", 1, vec![make_option("a1", &[("L", "from A")])]),
            make_group("b", 2, vec![make_option("b1", &[("L", "from B")])]),
        ]);
        let selection = Selection::initialize(&product);

        let ov = resolve_overrides(&product, &selection);
        assert_eq!(ov.get("L").map(String::as_str), Some("from B"));
    }

    #[test]
    fn test_collision_precedence_follows_order_not_source_position() {
        // Declared B-first in the product, but A has the higher order
        let product = make_product(vec![
            make_group("b", 2, vec![make_option("b1", &[("L", "from B")])]),
            make_group("a", 1, vec![make_option("a1", &[("L", "from A")])]),
        ]);
        let selection = Selection::initialize(&product);

        let ov = resolve_overrides(&product, &selection);
        assert_eq!(ov.get("L").map(String::as_str), Some("from B"));
    }

    #[test]
    fn test_unselected_options_contribute_nothing() {
        let product = make_product(vec![make_group(
            "cabin",
            1,
            vec![
                make_option("std", &[]),
                make_option("premium", &[("Moc silnika", "30 KM")]),
            ],
        )]);
        // std is first and default_option picks the marked default; both are
        // marked here, so pin the selection explicitly
        let selection = Selection::default().with("cabin", "std");

        assert!(resolve_overrides(&product, &selection).is_empty());
    }

    #[test]
    fn test_disjoint_labels_accumulate_across_groups() {
        let product = make_product(vec![
            make_group("a", 1, vec![make_option("a1", &[("Masa", "2 700 kg")])]),
            make_group("b", 2, vec![make_option("b1", &[("Moc", "30 KM")])]),
        ]);
        let selection = Selection::initialize(&product);

        let ov = resolve_overrides(&product, &selection);
        assert_eq!(ov.len(), 2);
        assert_eq!(ov.get("Masa").map(String::as_str), Some("2 700 kg"));
        assert_eq!(ov.get("Moc").map(String::as_str), Some("30 KM"));
    }
}
