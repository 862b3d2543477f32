//! Docset Model
//!
//! A docset is a named variant of one documentation tree: its own source
//! subdirectory plus configuration values that apply only while that variant is
//! being built. The registry keeps docsets in declaration order; the first entry
//! is the default when no docset is selected.

use crate::config::ConfigMap;
use crate::error::SharedConfError;
use serde::Deserialize;
use serde_json::Value;
use std::path::PathBuf;

pub mod apply;
pub mod resolver;

pub use apply::{apply_config, restricted_override_message, DEFAULT_RESTRICTED_KEYS};
pub use resolver::{resolve, resolve_with, Resolution};

/// Key identifying a docset ("api", "dev", "user")
pub type DocsetName = String;

/// Source location and configuration overrides for one docset
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DocsetSpec {
    /// Source directory relative to the project root (defaults to the docset name)
    #[serde(default)]
    pub path: Option<PathBuf>,

    /// Values merged into the host configuration while this docset is active
    #[serde(default)]
    pub config: ConfigMap,
}

impl DocsetSpec {
    /// Spec with a custom source directory and no overrides
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Some(path.into()),
            config: ConfigMap::new(),
        }
    }

    /// Add one configuration override
    pub fn with_config(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.config.insert(key.into(), value.into());
        self
    }

    /// Source directory for this spec when registered under `name`
    pub fn source_dir(&self, name: &str) -> PathBuf {
        self.path
            .clone()
            .unwrap_or_else(|| PathBuf::from(name))
    }
}

/// Ordered mapping of docset name to spec
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DocsetRegistry {
    entries: Vec<(DocsetName, DocsetSpec)>,
}

impl DocsetRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Add a docset. Re-registering a name replaces its spec but keeps its position.
    pub fn insert(&mut self, name: impl Into<DocsetName>, spec: DocsetSpec) {
        let name = name.into();
        match self.entries.iter_mut().find(|(existing, _)| *existing == name) {
            Some((_, slot)) => *slot = spec,
            None => self.entries.push((name, spec)),
        }
    }

    /// Builder-style insert
    pub fn with(mut self, name: impl Into<DocsetName>, spec: DocsetSpec) -> Self {
        self.insert(name, spec);
        self
    }

    pub fn get(&self, name: &str) -> Option<&DocsetSpec> {
        self.entries
            .iter()
            .find(|(existing, _)| existing == name)
            .map(|(_, spec)| spec)
    }

    /// Get a docset spec or fail with the list of known names
    pub fn get_or_error(&self, name: &str) -> Result<&DocsetSpec, SharedConfError> {
        self.get(name)
            .ok_or_else(|| SharedConfError::unknown_docset(name, self.names()))
    }

    /// First declared docset, used when none is selected
    pub fn default_name(&self) -> Option<&str> {
        self.entries.first().map(|(name, _)| name.as_str())
    }

    /// Docset names in declaration order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &DocsetSpec)> {
        self.entries.iter().map(|(name, spec)| (name.as_str(), spec))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Build a registry from the value of the `sharedconf_docsets` key.
    ///
    /// `null` is an empty registry. Each entry must be a table; `null` entries
    /// are accepted as an empty spec.
    pub fn from_value(value: &Value) -> Result<Self, SharedConfError> {
        let table = match value {
            Value::Null => return Ok(Self::new()),
            Value::Object(table) => table,
            other => {
                return Err(SharedConfError::InvalidValue {
                    key: "sharedconf_docsets".to_string(),
                    reason: format!("expected a table of docsets, found {}", value_kind(other)),
                })
            }
        };

        let mut registry = Self::new();
        for (name, entry) in table {
            if name.is_empty() {
                return Err(SharedConfError::InvalidDocset {
                    name: name.clone(),
                    reason: "docset name cannot be empty".to_string(),
                });
            }
            let spec = match entry {
                Value::Null => DocsetSpec::default(),
                Value::Object(_) => serde_json::from_value::<DocsetSpec>(entry.clone())
                    .map_err(|e| SharedConfError::InvalidDocset {
                        name: name.clone(),
                        reason: e.to_string(),
                    })?,
                other => {
                    return Err(SharedConfError::InvalidDocset {
                        name: name.clone(),
                        reason: format!("expected a table, found {}", value_kind(other)),
                    })
                }
            };
            registry.insert(name.clone(), spec);
        }
        Ok(registry)
    }
}

pub(crate) fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "a table",
    }
}
