//! Docset resolution: environment variable → active docset and source directory.

use crate::docset::DocsetRegistry;
use crate::error::SharedConfError;
use std::path::PathBuf;
use tracing::debug;

/// Environment variable consulted when the host configuration does not name one
pub const DEFAULT_ENV_VAR: &str = "DOCSET";

/// Outcome of resolving the active docset
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    /// Source directory relative to the project root
    pub source_dir: PathBuf,
    /// Name of the active docset
    pub active: String,
    /// True when the environment did not select a docset
    pub defaulted: bool,
}

/// Resolve the active docset from the process environment.
///
/// An unset or empty `env_var_name` selects `default_key`; a name missing from
/// the registry is an error.
pub fn resolve(
    env_var_name: &str,
    registry: &DocsetRegistry,
    default_key: Option<&str>,
) -> Result<Resolution, SharedConfError> {
    resolve_with(|name| std::env::var(name).ok(), env_var_name, registry, default_key)
}

/// Same as [`resolve`], reading the variable through `lookup`.
pub fn resolve_with<F>(
    lookup: F,
    env_var_name: &str,
    registry: &DocsetRegistry,
    default_key: Option<&str>,
) -> Result<Resolution, SharedConfError>
where
    F: Fn(&str) -> Option<String>,
{
    let selected = lookup(env_var_name).filter(|value| !value.is_empty());
    let defaulted = selected.is_none();

    let active = match selected {
        Some(value) => value,
        None => default_key
            .or_else(|| registry.default_name())
            .ok_or(SharedConfError::EmptyRegistry)?
            .to_string(),
    };

    let spec = registry.get_or_error(&active)?;
    let source_dir = spec.source_dir(&active);

    debug!(
        env_var = env_var_name,
        docset = %active,
        defaulted,
        source_dir = %source_dir.display(),
        "Resolved docset"
    );

    Ok(Resolution {
        source_dir,
        active,
        defaulted,
    })
}
