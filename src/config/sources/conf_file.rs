//! Project config file source: <project>/conf.toml or an explicit path.

use crate::config::ConfigMap;
use crate::error::SharedConfError;
use serde_json::Value;
use std::path::Path;
use tracing::debug;

/// Read the project configuration file. The file must exist and is always parsed
/// as TOML, whatever its extension. Keys keep their case and declaration order.
pub fn read(path: &Path) -> Result<ConfigMap, SharedConfError> {
    if !path.is_file() {
        return Err(SharedConfError::ConfigError(format!(
            "configuration file {} not found",
            path.display()
        )));
    }
    debug!(config_path = %path.display(), "Reading configuration file");

    let contents = std::fs::read_to_string(path)?;
    let table: toml::Table = toml::from_str(&contents).map_err(|e| {
        SharedConfError::ConfigError(format!("{}: {}", path.display(), e.message()))
    })?;
    Ok(table
        .into_iter()
        .map(|(key, value)| (key, to_config_value(value)))
        .collect())
}

/// Convert a TOML value into an option value; datetimes become strings
pub(crate) fn to_config_value(value: toml::Value) -> Value {
    match value {
        toml::Value::String(s) => Value::String(s),
        toml::Value::Integer(i) => Value::from(i),
        toml::Value::Float(f) => Value::from(f),
        toml::Value::Boolean(b) => Value::Bool(b),
        toml::Value::Datetime(dt) => Value::String(dt.to_string()),
        toml::Value::Array(items) => {
            Value::Array(items.into_iter().map(to_config_value).collect())
        }
        toml::Value::Table(table) => Value::Object(
            table
                .into_iter()
                .map(|(key, value)| (key, to_config_value(value)))
                .collect(),
        ),
    }
}
