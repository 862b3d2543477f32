//! Logging System
//!
//! Structured logging using the `tracing` crate. Events go to stderr so command
//! output on stdout stays machine-readable.

use crate::error::SharedConfError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::io::IsTerminal;
use tracing_subscriber::fmt::time::ChronoUtc;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Registry};

/// Logging configuration, read from the `[logging]` table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LoggingConfig {
    /// Log level: trace, debug, info, warn, error, off
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Output format: json, text (default: text)
    #[serde(default = "default_format")]
    pub format: String,

    /// Enable colored output (text format only)
    #[serde(default = "default_true")]
    pub color: bool,

    /// Module-specific log levels
    #[serde(default)]
    pub modules: BTreeMap<String, String>,
}

fn default_log_level() -> String {
    "warn".to_string()
}

fn default_format() -> String {
    "text".to_string()
}

fn default_true() -> bool {
    true
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_format(),
            color: default_true(),
            modules: BTreeMap::new(),
        }
    }
}

/// Logging values given explicitly on the command line
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoggingFlags {
    /// Level or filter from `--quiet`, `--log-level` or `--verbose`
    pub level: Option<String>,
    /// Format from `--log-format`
    pub format: Option<String>,
}

/// Initialize the logging system
///
/// Priority order (highest to lowest):
/// 1. CLI flags
/// 2. Environment variables (SHAREDCONF_LOG, SHAREDCONF_LOG_FORMAT, SHAREDCONF_LOG_MODULES)
/// 3. Configuration file
/// 4. Defaults
pub fn init_logging(config: &LoggingConfig, flags: &LoggingFlags) -> Result<(), SharedConfError> {
    let env = |name: &str| std::env::var(name).ok();
    let filter = build_env_filter(config, flags, env)?;
    let format = determine_format(config, flags, env)?;

    let base_subscriber = Registry::default().with(filter);

    let result = if format == "json" {
        base_subscriber
            .with(
                fmt::layer()
                    .json()
                    .with_target(true)
                    .with_timer(ChronoUtc::rfc_3339())
                    .with_writer(std::io::stderr),
            )
            .try_init()
    } else {
        base_subscriber
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_timer(ChronoUtc::rfc_3339())
                    .with_ansi(config.color && std::io::stderr().is_terminal())
                    .with_writer(std::io::stderr),
            )
            .try_init()
    };

    result.map_err(|e| SharedConfError::ConfigError(format!("Failed to initialize logging: {}", e)))
}

/// Build the level filter; `lookup` reads environment variables
fn build_env_filter<F>(
    config: &LoggingConfig,
    flags: &LoggingFlags,
    lookup: F,
) -> Result<EnvFilter, SharedConfError>
where
    F: Fn(&str) -> Option<String>,
{
    let level = match &flags.level {
        Some(level) => level,
        None => {
            let from_env = lookup("SHAREDCONF_LOG")
                .filter(|value| !value.is_empty())
                .and_then(|value| EnvFilter::try_new(value).ok());
            if let Some(filter) = from_env {
                return Ok(filter);
            }
            &config.level
        }
    };

    if level == "off" {
        return Ok(EnvFilter::new("off"));
    }

    let mut filter = EnvFilter::try_new(level).map_err(|e| {
        SharedConfError::ConfigError(format!("Invalid log level '{}': {}", level, e))
    })?;

    for (module, module_level) in &config.modules {
        filter = filter.add_directive(parse_directive(module, module_level)?);
    }

    if let Some(modules_str) = lookup("SHAREDCONF_LOG_MODULES") {
        for module_spec in modules_str.split(',') {
            if let Some((module, level)) = module_spec.split_once('=') {
                filter = filter.add_directive(parse_directive(module.trim(), level.trim())?);
            }
        }
    }

    Ok(filter)
}

fn parse_directive(
    module: &str,
    level: &str,
) -> Result<tracing_subscriber::filter::Directive, SharedConfError> {
    format!("{}={}", module, level)
        .parse()
        .map_err(|e| SharedConfError::ConfigError(format!("Invalid log directive: {}", e)))
}

/// Determine output format from flags, environment or config
fn determine_format<F>(
    config: &LoggingConfig,
    flags: &LoggingFlags,
    lookup: F,
) -> Result<String, SharedConfError>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(format) = &flags.format {
        validate_format(format)?;
        return Ok(format.clone());
    }

    if let Some(format) = lookup("SHAREDCONF_LOG_FORMAT") {
        if format == "json" || format == "text" {
            return Ok(format);
        }
    }

    validate_format(&config.format)?;
    Ok(config.format.clone())
}

fn validate_format(format: &str) -> Result<(), SharedConfError> {
    if format != "json" && format != "text" {
        return Err(SharedConfError::ConfigError(format!(
            "Invalid log format: {} (must be 'json' or 'text')",
            format
        )));
    }
    Ok(())
}
