//! CLI parse: clap types for sharedconf. No behavior; definitions only.

use crate::config::ConfigOverride;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Sharedconf CLI - select a documentation docset and print its build configuration
#[derive(Parser)]
#[command(name = "sharedconf")]
#[command(about = "Select a documentation docset and print its build configuration")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Documentation project root (docset paths are relative to it)
    #[arg(long, default_value = ".")]
    pub project: PathBuf,

    /// Configuration file path (default: <project>/conf.toml)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Override a configuration value, e.g. -D language=es (repeatable)
    #[arg(short = 'D', long = "define", value_name = "KEY=VALUE")]
    pub define: Vec<ConfigOverride>,

    /// Enable verbose logging
    #[arg(long, default_value = "false")]
    pub verbose: bool,

    /// Disable logging
    #[arg(long, default_value = "false")]
    pub quiet: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long)]
    pub log_format: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show the active docset and its source directory
    Resolve {
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
        /// Fail if the source directory does not exist
        #[arg(long)]
        check: bool,
    },
    /// Show the configuration after the active docset's overrides are merged
    Show {
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
        /// Show a single option
        #[arg(long)]
        key: Option<String>,
    },
    /// List configured docsets in declaration order
    List {
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },
}
