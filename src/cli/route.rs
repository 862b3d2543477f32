//! CLI route: single route table and run context. Dispatches to activation and presentation.

use crate::activation::activate_with;
use crate::cli::parse::Commands;
use crate::cli::presentation::{
    format_docset_list, format_option, format_options, format_resolve_report, DocsetRow,
    ResolveReport,
};
use crate::config::{ConfigLoader, ConfigOverride, HostConfig};
use crate::docset::resolve_with;
use crate::error::SharedConfError;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Runtime context for CLI execution: the loaded host configuration before any
/// docset is activated.
pub struct RunContext {
    host: HostConfig,
}

impl RunContext {
    /// Load `<project>/conf.toml` (or `config_path`) and apply command-line overrides.
    pub fn new(
        project_root: &Path,
        config_path: Option<&Path>,
        overrides: &[ConfigOverride],
    ) -> Result<Self, SharedConfError> {
        Ok(Self::from_host(Self::load_host(
            project_root,
            config_path,
            overrides,
        )?))
    }

    /// Host configuration for a command line: file, then `-D` overrides
    pub fn load_host(
        project_root: &Path,
        config_path: Option<&Path>,
        overrides: &[ConfigOverride],
    ) -> Result<HostConfig, SharedConfError> {
        let project_root = dunce::canonicalize(project_root)?;
        let mut host = match config_path {
            Some(path) => ConfigLoader::load_with_root(path, &project_root)?,
            None => ConfigLoader::load(&project_root)?,
        };
        host.apply_overrides(overrides);
        Ok(host)
    }

    pub fn from_host(host: HostConfig) -> Self {
        debug!(
            project_root = %host.project_root().display(),
            "CLI context initialized"
        );
        Self { host }
    }

    /// Host configuration as loaded, before activation
    pub fn host(&self) -> &HostConfig {
        &self.host
    }

    /// Execute a CLI command against the process environment.
    pub fn execute(&self, command: &Commands) -> Result<String, SharedConfError> {
        self.execute_with(command, |name| std::env::var(name).ok())
    }

    /// Execute a CLI command, reading the docset variable through `lookup`.
    pub fn execute_with<F>(&self, command: &Commands, lookup: F) -> Result<String, SharedConfError>
    where
        F: Fn(&str) -> Option<String>,
    {
        match command {
            Commands::Resolve { format, check } => {
                let mut host = self.host.clone();
                let active = activate_with(&mut host, lookup)?;
                if *check && !host.srcdir().is_dir() {
                    return Err(SharedConfError::SourceDirMissing {
                        name: active.name,
                        path: host.srcdir().to_path_buf(),
                    });
                }
                let report = ResolveReport {
                    docset: active.name,
                    srcdir: host.srcdir().to_path_buf(),
                    defaulted: active.defaulted,
                    restricted_overrides: active.restricted_overrides,
                };
                format_resolve_report(&report, format)
            }
            Commands::Show { format, key } => {
                let mut host = self.host.clone();
                activate_with(&mut host, lookup)?;
                match key {
                    Some(key) => {
                        let value = host.get(key).ok_or_else(|| SharedConfError::InvalidValue {
                            key: key.clone(),
                            reason: "option is not set".to_string(),
                        })?;
                        format_option(key, value, format)
                    }
                    None => format_options(host.values(), format),
                }
            }
            Commands::List { format } => {
                let registry = self.host.docsets()?;
                let env_var = self.host.env_var_name()?;
                // An unknown selection must not hide the list itself
                let active = resolve_with(lookup, &env_var, &registry, None)
                    .ok()
                    .map(|r| r.active);
                let default = registry.default_name();
                let rows: Vec<DocsetRow> = registry
                    .iter()
                    .map(|(name, spec)| DocsetRow {
                        name: name.to_string(),
                        path: spec.source_dir(name),
                        overrides: spec.config.keys().cloned().collect(),
                        default: default == Some(name),
                        active: active.as_deref() == Some(name),
                    })
                    .collect();
                format_docset_list(&rows, format)
            }
        }
    }

    /// Project root every docset path is relative to
    pub fn project_root(&self) -> PathBuf {
        self.host.project_root().to_path_buf()
    }
}
