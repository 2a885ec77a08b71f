//! Scalar value codec
//!
//! Parameter and feature values arrive as opaque serialized scalars:
//! numbers and booleans stored as JSON-encoded strings, strings stored
//! plain or JSON-quoted, and already-native values. `decode` normalizes
//! all of them without ever failing; a parse failure means "not JSON",
//! not an error, and the original value is returned unchanged.

use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Declared value type of a parameter or feature
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ValueKind {
    #[default]
    Text,
    Number,
    Boolean,
    Enum,
    Date,
}

/// Decode a stored scalar to its native value.
///
/// Strings that parse as JSON yield the parsed value (covers numbers,
/// booleans and quoted strings stored JSON-encoded); anything else is
/// returned unchanged. Decoding an already-native value is a no-op.
pub fn decode(raw: &Value) -> Value {
    match raw {
        Value::String(s) => serde_json::from_str(s).unwrap_or_else(|_| raw.clone()),
        _ => raw.clone(),
    }
}

/// True when the value decodes to null or an empty string.
///
/// Catches JSON-encoded empties like `'""'` and `'null'`.
pub fn is_empty(raw: &Value) -> bool {
    match decode(raw) {
        Value::Null => true,
        Value::String(s) => s.is_empty(),
        _ => false,
    }
}

/// Render a stored scalar for display.
///
/// Booleans render through the localized yes/no labels; `Date` values in
/// ISO form render as `DD.MM.YYYY`, falling back to the raw string when
/// unparseable. Strings render without JSON quoting.
pub fn display(raw: &Value, kind: ValueKind, yes_label: &str, no_label: &str) -> String {
    match decode(raw) {
        Value::Null => String::new(),
        Value::Bool(b) => if b { yes_label } else { no_label }.to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => match kind {
            ValueKind::Date => format_date(&s),
            _ => s,
        },
        other => other.to_string(),
    }
}

/// Format an ISO date (`YYYY-MM-DD` or RFC 3339) as `DD.MM.YYYY`
fn format_date(s: &str) -> String {
    if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return date.format("%d.%m.%Y").to_string();
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return dt.date_naive().format("%d.%m.%Y").to_string();
    }
    s.to_string()
}
