//! Merge rules: defaults, override order, conflict handling.
//!
//! Defaults are the lowest layer; the configuration file replaces them key by key
//! and keeps its own key order. Command-line overrides are applied afterwards on
//! the loaded map and replace whole values.

use crate::config::{ConfigMap, KEY_DOCSETS, KEY_ENV_VAR};
use crate::docset::resolver::DEFAULT_ENV_VAR;
use serde_json::Value;

/// Values every host configuration starts from
pub fn defaults() -> ConfigMap {
    let mut defaults = ConfigMap::new();
    defaults.insert(KEY_ENV_VAR.to_string(), Value::from(DEFAULT_ENV_VAR));
    defaults.insert(KEY_DOCSETS.to_string(), Value::Object(ConfigMap::new()));
    defaults
}

/// Layer `file` over `defaults`. File keys come first in file order; defaults the
/// file leaves unset are appended.
pub fn layer_over_defaults(file: ConfigMap, defaults: ConfigMap) -> ConfigMap {
    let mut merged = file;
    for (key, value) in defaults {
        merged.entry(key).or_insert(value);
    }
    merged
}
