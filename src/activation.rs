//! Docset activation: the build-start step that selects one docset, points the
//! build at its source directory and merges its overrides into the host config.

use crate::config::HostConfig;
use crate::docset::{apply_config, resolve_with};
use crate::error::SharedConfError;
use std::path::PathBuf;
use tracing::info;

/// Result of activating a docset on a [`HostConfig`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveDocset {
    pub name: String,
    /// Source directory relative to the project root
    pub source_dir: PathBuf,
    /// True when the docset came from the registry default
    pub defaulted: bool,
    /// Build-global keys that were overridden (each logged once as a warning)
    pub restricted_overrides: Vec<String>,
}

/// Activate the docset selected by the process environment
pub fn activate(host: &mut HostConfig) -> Result<ActiveDocset, SharedConfError> {
    activate_with(host, |name| std::env::var(name).ok())
}

/// Activate the docset selected through `lookup`.
///
/// Nothing in `host` changes unless resolution succeeds.
pub fn activate_with<F>(host: &mut HostConfig, lookup: F) -> Result<ActiveDocset, SharedConfError>
where
    F: Fn(&str) -> Option<String>,
{
    let registry = host.docsets()?;
    let env_var = host.env_var_name()?;
    let restricted_keys = host.restricted_keys()?;

    let resolution = resolve_with(lookup, &env_var, &registry, None)?;
    let restricted_overrides =
        apply_config(host, &registry, &resolution.active, &restricted_keys)?;

    let srcdir = host.project_root().join(&resolution.source_dir);
    host.set_srcdir(srcdir);

    info!(
        docset = %resolution.active,
        srcdir = %host.srcdir().display(),
        "Activated docset"
    );

    Ok(ActiveDocset {
        name: resolution.active,
        source_dir: resolution.source_dir,
        defaulted: resolution.defaulted,
        restricted_overrides,
    })
}
