//! Command-line overrides (`-D key=value`), applied after the configuration file.

use super::sources::conf_file::to_config_value;
use super::ConfigMap;
use crate::error::SharedConfError;
use serde_json::Value;
use std::str::FromStr;

/// One `key=value` override. Dotted keys address nested tables.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigOverride {
    pub path: Vec<String>,
    pub value: Value,
}

impl ConfigOverride {
    pub fn new(key: &str, value: impl Into<Value>) -> Self {
        Self {
            path: key.split('.').map(str::to_string).collect(),
            value: value.into(),
        }
    }

    /// Dotted key as written on the command line
    pub fn key(&self) -> String {
        self.path.join(".")
    }

    /// Set the value, creating (or replacing non-table) intermediate tables
    pub fn apply(&self, values: &mut ConfigMap) {
        let Some((last, parents)) = self.path.split_last() else {
            return;
        };

        let mut table = values;
        for segment in parents {
            let slot = table
                .entry(segment.clone())
                .or_insert_with(|| Value::Object(ConfigMap::new()));
            if !slot.is_object() {
                *slot = Value::Object(ConfigMap::new());
            }
            table = match slot {
                Value::Object(map) => map,
                _ => unreachable!("slot was just made a table"),
            };
        }
        table.insert(last.clone(), self.value.clone());
    }
}

impl FromStr for ConfigOverride {
    type Err = SharedConfError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let (key, value) = raw
            .split_once('=')
            .ok_or_else(|| SharedConfError::InvalidOverride(raw.to_string()))?;
        let key = key.trim();
        if key.is_empty() || key.split('.').any(|segment| segment.trim().is_empty()) {
            return Err(SharedConfError::InvalidOverride(raw.to_string()));
        }

        Ok(Self {
            path: key.split('.').map(|s| s.trim().to_string()).collect(),
            value: parse_value(value.trim()),
        })
    }
}

/// Parse a TOML value expression; anything else is kept as a plain string
fn parse_value(raw: &str) -> Value {
    toml::from_str::<toml::Table>(&format!("value = {}", raw))
        .ok()
        .and_then(|mut table| table.remove("value"))
        .map(to_config_value)
        .unwrap_or_else(|| Value::String(raw.to_string()))
}
