//! Quick-Spec Projector
//!
//! Projects the parameters flagged for summary display into ordered,
//! display-ready entries with overrides applied. Overridden values are
//! raw replacement strings assumed to carry their own formatting, so
//! their unit is suppressed.

use serde::Serialize;
use serde_json::Value;
use shared::models::Product;
use shared::value;

use crate::config::Config;
use crate::overrides::resolve_overrides;
use crate::selection::Selection;

/// Display-ready quick-spec row
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuickSpecEntry {
    pub label: String,
    pub value: String,
    /// Unit suffix; empty for overridden values
    pub unit: String,
    pub was_overridden: bool,
}

/// Quick-spec summary for the current selection
pub fn quick_specs(
    product: &Product,
    selection: &Selection,
    config: &Config,
) -> Vec<QuickSpecEntry> {
    let ov = resolve_overrides(product, selection);

    let mut params: Vec<_> = product
        .parameters
        .iter()
        .filter(|p| p.is_quick_spec)
        .collect();
    params.sort_by_key(|p| p.quick_spec_order);

    let mut entries = Vec::with_capacity(params.len());
    for param in params {
        let (value, unit, was_overridden) = match ov.get(&param.label) {
            Some(raw) => {
                // Raw replacement strings still get the codec emptiness
                // check, so JSON-encoded empties like '""' drop out
                if value::is_empty(&Value::String(raw.clone())) {
                    continue;
                }
                (raw.clone(), String::new(), true)
            }
            None => (
                value::display(&param.value, param.kind, &config.yes_label, &config.no_label),
                param.unit.clone().unwrap_or_default(),
                false,
            ),
        };
        if value.is_empty() {
            continue;
        }

        let label = match &param.quick_spec_label {
            Some(short) if !short.is_empty() => short.clone(),
            _ => param.label.clone(),
        };
        entries.push(QuickSpecEntry {
            label,
            value,
            unit,
            was_overridden,
        });
    }
    entries
}
