//! Parameter and Feature Models

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::value::ValueKind;

/// Technical parameter instance with its current stored value
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParameterInstance {
    pub id: String,
    pub key: String,
    /// Display label; also the key variant overrides match on
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    /// Spec-table tab name; `None` falls into the default bucket
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,
    #[serde(default)]
    pub kind: ValueKind,
    /// Codec-encoded current value (may be an already-native scalar)
    #[serde(default)]
    pub value: Value,
    #[serde(default)]
    pub is_quick_spec: bool,
    #[serde(default)]
    pub quick_spec_order: i32,
    /// Short label override for the quick-spec summary
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quick_spec_label: Option<String>,
}

/// Feature instance
///
/// Display-only sibling of [`ParameterInstance`]: not subject to variant
/// overrides or quick-spec projection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeatureInstance {
    pub id: String,
    pub key: String,
    pub label: String,
    #[serde(default)]
    pub kind: ValueKind,
    #[serde(default)]
    pub value: Value,
}
