//! Host Configuration
//!
//! The documentation tool's configuration as an explicit value: an ordered map of
//! option name to value, plus the project root and the source directory the build
//! reads from. Loaded from the project's `conf.toml` as TOML over built-in defaults,
//! then adjusted by command-line overrides before a docset is activated.

use crate::docset::{DocsetRegistry, DEFAULT_RESTRICTED_KEYS};
use crate::docset::resolver::DEFAULT_ENV_VAR;
use crate::error::SharedConfError;
use crate::logging::LoggingConfig;
use serde_json::Value;
use std::path::{Path, PathBuf};

mod loader;
mod merge;
mod overrides;
mod sources;

pub use loader::{ConfigLoader, CONF_FILE_NAME};
pub use overrides::ConfigOverride;

/// Ordered option map; declaration order of the configuration file is kept
pub type ConfigMap = serde_json::Map<String, Value>;

/// Option holding the docset registry
pub const KEY_DOCSETS: &str = "sharedconf_docsets";
/// Option naming the environment variable that selects the docset
pub const KEY_ENV_VAR: &str = "sharedconf_env_var";
/// Option replacing the list of build-global keys
pub const KEY_RESTRICTED_KEYS: &str = "sharedconf_restricted_keys";
/// Option holding the logging table
pub const KEY_LOGGING: &str = "logging";

/// Configuration of one documentation build
#[derive(Debug, Clone, PartialEq)]
pub struct HostConfig {
    project_root: PathBuf,
    srcdir: PathBuf,
    values: ConfigMap,
}

impl HostConfig {
    /// Empty configuration; the source directory starts at the project root
    pub fn new(project_root: PathBuf) -> Self {
        Self::from_values(project_root, ConfigMap::new())
    }

    pub fn from_values(project_root: PathBuf, values: ConfigMap) -> Self {
        Self {
            srcdir: project_root.clone(),
            project_root,
            values,
        }
    }

    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    /// Directory the build reads sources from
    pub fn srcdir(&self) -> &Path {
        &self.srcdir
    }

    pub fn set_srcdir(&mut self, srcdir: PathBuf) {
        self.srcdir = srcdir;
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }

    /// Set an option, replacing any previous value entirely
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.values.insert(key.into(), value.into());
    }

    /// All options in declaration order
    pub fn values(&self) -> &ConfigMap {
        &self.values
    }

    /// Apply command-line overrides in order
    pub fn apply_overrides(&mut self, overrides: &[ConfigOverride]) {
        for o in overrides {
            o.apply(&mut self.values);
        }
    }

    /// Docset registry declared under `sharedconf_docsets` (empty when absent)
    pub fn docsets(&self) -> Result<DocsetRegistry, SharedConfError> {
        match self.get(KEY_DOCSETS) {
            Some(value) => DocsetRegistry::from_value(value),
            None => Ok(DocsetRegistry::new()),
        }
    }

    /// Name of the environment variable selecting the docset
    pub fn env_var_name(&self) -> Result<String, SharedConfError> {
        match self.get(KEY_ENV_VAR) {
            None | Some(Value::Null) => Ok(DEFAULT_ENV_VAR.to_string()),
            Some(Value::String(name)) if !name.is_empty() => Ok(name.clone()),
            Some(other) => Err(SharedConfError::InvalidValue {
                key: KEY_ENV_VAR.to_string(),
                reason: format!("expected a variable name, found {}", other),
            }),
        }
    }

    /// Keys that warn when overridden per docset
    pub fn restricted_keys(&self) -> Result<Vec<String>, SharedConfError> {
        let value = match self.get(KEY_RESTRICTED_KEYS) {
            None | Some(Value::Null) => {
                return Ok(DEFAULT_RESTRICTED_KEYS.iter().map(|k| k.to_string()).collect())
            }
            Some(value) => value,
        };

        let invalid = || SharedConfError::InvalidValue {
            key: KEY_RESTRICTED_KEYS.to_string(),
            reason: "expected a list of option names".to_string(),
        };
        value
            .as_array()
            .ok_or_else(invalid)?
            .iter()
            .map(|v| v.as_str().map(str::to_string).ok_or_else(invalid))
            .collect()
    }

    /// Logging table, or defaults when absent
    pub fn logging(&self) -> Result<LoggingConfig, SharedConfError> {
        match self.get(KEY_LOGGING) {
            None | Some(Value::Null) => Ok(LoggingConfig::default()),
            Some(value) => serde_json::from_value(value.clone()).map_err(|e| {
                SharedConfError::InvalidValue {
                    key: KEY_LOGGING.to_string(),
                    reason: e.to_string(),
                }
            }),
        }
    }
}
