//! Spec-Table Grouper
//!
//! Groups the full parameter set by group tag for tabbed display, after
//! override application and empty-value filtering. Bucket order follows
//! first appearance in the parameter list; within a bucket, source order
//! is preserved and no extra sort is applied.

use serde::Serialize;
use serde_json::Value;
use shared::models::Product;
use shared::value;

use crate::config::Config;
use crate::overrides::resolve_overrides;
use crate::selection::Selection;

/// Display-ready spec-table row
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpecEntry {
    pub label: String,
    pub value: String,
    /// Unit suffix; empty for overridden values
    pub unit: String,
    pub was_overridden: bool,
}

/// Named bucket of spec-table rows (one tab)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpecGroup {
    pub name: String,
    pub entries: Vec<SpecEntry>,
}

/// Grouped spec table
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct GroupedSpecs {
    pub groups: Vec<SpecGroup>,
}

impl GroupedSpecs {
    /// Bucket names in tab order
    pub fn group_names(&self) -> Vec<&str> {
        self.groups.iter().map(|g| g.name.as_str()).collect()
    }

    /// Bucket by name
    pub fn get(&self, name: &str) -> Option<&SpecGroup> {
        self.groups.iter().find(|g| g.name == name)
    }
}

/// Grouped spec table for the current selection
pub fn grouped_specs(product: &Product, selection: &Selection, config: &Config) -> GroupedSpecs {
    let ov = resolve_overrides(product, selection);
    let mut grouped = GroupedSpecs::default();

    for param in &product.parameters {
        let (value, unit, was_overridden) = match ov.get(&param.label) {
            Some(raw) => {
                // Overrides are raw strings, but still run through the
                // codec emptiness check to catch JSON-encoded empties
                // like '""' and 'null'
                if value::is_empty(&Value::String(raw.clone())) {
                    continue;
                }
                (raw.clone(), String::new(), true)
            }
            None => {
                if value::is_empty(&param.value) {
                    continue;
                }
                (
                    value::display(&param.value, param.kind, &config.yes_label, &config.no_label),
                    param.unit.clone().unwrap_or_default(),
                    false,
                )
            }
        };

        let bucket = param
            .group
            .clone()
            .filter(|g| !g.is_empty())
            .unwrap_or_else(|| config.default_group.clone());

        let entry = SpecEntry {
            label: param.label.clone(),
            value,
            unit,
            was_overridden,
        };
        match grouped.groups.iter_mut().find(|g| g.name == bucket) {
            Some(group) => group.entries.push(entry),
            None => grouped.groups.push(SpecGroup {
                name: bucket,
                entries: vec![entry],
            }),
        }
    }

    grouped
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use serde_json::json;
    use shared::models::{ParameterInstance, VariantGroup, VariantOption};
    use shared::value::ValueKind;

    use super::*;

    fn make_param(label: &str, group: Option<&str>, value: serde_json::Value) -> ParameterInstance {
        ParameterInstance {
            id: format!("param-{label}"),
            key: label.to_lowercase().replace(' ', "_"),
            label: label.to_string(),
            unit: None,
            group: group.map(String::from),
            kind: ValueKind::Text,
            value,
            is_quick_spec: false,
            quick_spec_order: 0,
            quick_spec_label: None,
        }
    }

    fn make_product(parameters: Vec<ParameterInstance>, groups: Vec<VariantGroup>) -> Product {
        Product {
            id: "p1".to_string(),
            name: "Excavator".to_string(),
            base_price: 0.0,
            images: vec![],
            hero_image_id: None,
            parameters,
            features: vec![],
            variant_groups: groups,
            sections: vec![],
            downloads: vec![],
        }
    }

    fn override_group(order: i32, overrides: &[(&str, &str)]) -> VariantGroup {
        VariantGroup {
            id: format!("g{order}"),
            name: format!("g{order}"),
            order,
            options: vec![VariantOption {
                id: "opt".to_string(),
                name: "opt".to_string(),
                price_modifier: 0.0,
                is_default: true,
                images: vec![],
                parameter_overrides: overrides
                    .iter()
                    .map(|(k, v)| (k.to_string(), v.to_string()))
                    .collect(),
            }],
        }
    }

    #[test]
    fn test_buckets_follow_first_appearance_order() {
        let product = make_product(
            vec![
                make_param("A", Some("Wymiary"), json!("1")),
                make_param("B", Some("Silnik"), json!("2")),
                make_param("C", Some("Wymiary"), json!("3")),
            ],
            vec![],
        );
        let selection = Selection::initialize(&product);
        let specs = grouped_specs(&product, &selection, &Config::from_env());

        assert_eq!(specs.group_names(), ["Wymiary", "Silnik"]);
        let wymiary = specs.get("Wymiary").unwrap();
        let labels: Vec<_> = wymiary.entries.iter().map(|e| e.label.as_str()).collect();
        assert_eq!(labels, ["A", "C"]);
    }

    #[test]
    fn test_untagged_parameters_land_in_default_bucket() {
        let config = Config::from_env();
        let product = make_product(vec![make_param("A", None, json!("1"))], vec![]);
        let selection = Selection::initialize(&product);
        let specs = grouped_specs(&product, &selection, &config);

        assert_eq!(specs.group_names(), [config.default_group.as_str()]);
    }

    #[test]
    fn test_blank_group_tag_counts_as_untagged() {
        let config = Config::from_env();
        let product = make_product(vec![make_param("A", Some(""), json!("1"))], vec![]);
        let selection = Selection::initialize(&product);
        let specs = grouped_specs(&product, &selection, &config);

        assert_eq!(specs.group_names(), [config.default_group.as_str()]);
    }

    #[test]
    fn test_empty_values_filtered_including_json_encoded() {
        let product = make_product(
            vec![
                make_param("Plain empty", None, json!("")),
                make_param("Quoted empty", None, json!("\"\"")),
                make_param("Encoded null", None, json!("null")),
                make_param("Kept", None, json!("ok")),
            ],
            vec![],
        );
        let selection = Selection::initialize(&product);
        let specs = grouped_specs(&product, &selection, &Config::from_env());

        assert_eq!(specs.groups.len(), 1);
        assert_eq!(specs.groups[0].entries.len(), 1);
        assert_eq!(specs.groups[0].entries[0].label, "Kept");
    }

    #[test]
    fn test_json_encoded_empty_override_is_filtered() {
        let product = make_product(
            vec![make_param("Masa", None, json!("2700"))],
            vec![override_group(1, &[("Masa", "\"\"")])],
        );
        let selection = Selection::initialize(&product);
        let specs = grouped_specs(&product, &selection, &Config::from_env());

        assert!(specs.groups.is_empty());
    }

    #[test]
    fn test_override_applies_and_suppresses_unit() {
        let mut param = make_param("Moc silnika", Some("Silnik"), json!("25"));
        param.unit = Some("KM".to_string());
        let product = make_product(
            vec![param],
            vec![override_group(1, &[("Moc silnika", "30 KM")])],
        );
        let selection = Selection::initialize(&product);
        let specs = grouped_specs(&product, &selection, &Config::from_env());

        let entry = &specs.get("Silnik").unwrap().entries[0];
        assert_eq!(entry.value, "30 KM");
        assert_eq!(entry.unit, "");
        assert!(entry.was_overridden);
    }

    #[test]
    fn test_boolean_renders_localized() {
        let config = Config::from_env();
        let mut param = make_param("Kabina ogrzewana", None, json!(true));
        param.kind = ValueKind::Boolean;
        let mut negative = make_param("Klimatyzacja", None, json!("false"));
        negative.kind = ValueKind::Boolean;

        let product = make_product(vec![param, negative], vec![]);
        let selection = Selection::initialize(&product);
        let specs = grouped_specs(&product, &selection, &config);

        let entries = &specs.groups[0].entries;
        assert_eq!(entries[0].value, config.yes_label);
        assert_eq!(entries[1].value, config.no_label);
    }

    #[test]
    fn test_json_quoted_value_decodes_for_display() {
        let product = make_product(vec![make_param("Code", None, json!("\"12\""))], vec![]);
        let selection = Selection::initialize(&product);
        let specs = grouped_specs(&product, &selection, &Config::from_env());

        assert_eq!(specs.groups[0].entries[0].value, "12");
    }
}
