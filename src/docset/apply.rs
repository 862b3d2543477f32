//! Merge the active docset's overrides into the host configuration.

use crate::config::HostConfig;
use crate::docset::DocsetRegistry;
use crate::error::SharedConfError;
use tracing::{debug, warn};

/// Keys the host reads before per-docset overrides are merged
pub const DEFAULT_RESTRICTED_KEYS: &[&str] = &["language", "extensions"];

/// Warning text for an override of a build-global key
pub fn restricted_override_message(key: &str) -> String {
    format!(
        "Setting the `{}` option inside a docset's config is not supported, \
         it is applied to the whole build",
        key
    )
}

/// Copy every override of `active_key` into `host`, in declaration order.
///
/// Keys listed in `restricted_keys` are still set, but each one logs a warning.
/// Returns the restricted keys that were overridden.
pub fn apply_config<S: AsRef<str>>(
    host: &mut HostConfig,
    registry: &DocsetRegistry,
    active_key: &str,
    restricted_keys: &[S],
) -> Result<Vec<String>, SharedConfError> {
    let spec = registry.get_or_error(active_key)?;
    let mut restricted = Vec::new();

    for (key, value) in &spec.config {
        if restricted_keys.iter().any(|r| r.as_ref() == key) {
            warn!(docset = active_key, key = %key, "{}", restricted_override_message(key));
            restricted.push(key.clone());
        } else {
            debug!(docset = active_key, key = %key, "Applying docset override");
        }
        host.set(key.clone(), value.clone());
    }

    Ok(restricted)
}
