//! Configuration loader: defaults, then the project configuration file.

use super::merge::merge_policy;
use super::sources::conf_file;
use super::{ConfigMap, HostConfig};
use crate::error::SharedConfError;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Configuration file looked up in the project root
pub const CONF_FILE_NAME: &str = "conf.toml";

/// Loads [`HostConfig`] values: defaults, then the TOML configuration file
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load `<project_root>/conf.toml`
    pub fn load(project_root: &Path) -> Result<HostConfig, SharedConfError> {
        Self::load_with_root(&project_root.join(CONF_FILE_NAME), project_root)
    }

    /// Load an explicit configuration file; its directory is the project root
    pub fn load_from_file(path: &Path) -> Result<HostConfig, SharedConfError> {
        let root = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };
        Self::load_with_root(path, &root)
    }

    /// Load `path` for a project rooted at `project_root`
    pub fn load_with_root(path: &Path, project_root: &Path) -> Result<HostConfig, SharedConfError> {
        let file = conf_file::read(path)?;
        let values: ConfigMap = merge_policy::layer_over_defaults(file, merge_policy::defaults());

        debug!(
            config_path = %path.display(),
            options = values.len(),
            "Loaded host configuration"
        );
        Ok(HostConfig::from_values(project_root.to_path_buf(), values))
    }
}
