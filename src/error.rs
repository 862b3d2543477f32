//! Error types for docset selection and host configuration handling.

use thiserror::Error;

/// Errors raised while loading host configuration or activating a docset
#[derive(Debug, Error)]
pub enum SharedConfError {
    #[error("Unknown docset '{name}' (available: {})", .available.join(", "))]
    UnknownDocset {
        name: String,
        available: Vec<String>,
    },

    #[error("No docsets configured: `sharedconf_docsets` is empty")]
    EmptyRegistry,

    #[error("Invalid docset '{name}': {reason}")]
    InvalidDocset { name: String, reason: String },

    #[error("Invalid configuration override '{0}': expected KEY=VALUE")]
    InvalidOverride(String),

    #[error("Invalid value for `{key}`: {reason}")]
    InvalidValue { key: String, reason: String },

    #[error("Source directory for docset '{name}' does not exist: {path}")]
    SourceDirMissing { name: String, path: std::path::PathBuf },

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

impl SharedConfError {
    pub(crate) fn unknown_docset<'a>(
        name: &str,
        available: impl IntoIterator<Item = &'a str>,
    ) -> Self {
        SharedConfError::UnknownDocset {
            name: name.to_string(),
            available: available.into_iter().map(str::to_string).collect(),
        }
    }
}
