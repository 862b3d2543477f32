//! Sharedconf CLI Binary
//!
//! Prints the active docset, its source directory and the merged configuration.

use clap::Parser;
use sharedconf::cli::{map_error, Cli, RunContext};
use sharedconf::config::HostConfig;
use sharedconf::logging::{init_logging, LoggingConfig, LoggingFlags};
use sharedconf::SharedConfError;
use std::process;
use tracing::{debug, error};

fn main() {
    let cli = Cli::parse();

    // Loaded before logging starts since its `[logging]` table configures the subscriber
    let host = RunContext::load_host(&cli.project, cli.config.as_deref(), &cli.define);

    let logging_config = match build_logging_config(host.as_ref().ok()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", map_error(&e));
            process::exit(1);
        }
    };
    if let Err(e) = init_logging(&logging_config, &logging_flags(&cli)) {
        eprintln!("Failed to initialize logging: {}", e);
        process::exit(1);
    }

    debug!("Sharedconf CLI starting");

    let context = match host {
        Ok(host) => RunContext::from_host(host),
        Err(e) => {
            error!("Error loading configuration: {}", e);
            eprintln!("{}", map_error(&e));
            process::exit(1);
        }
    };

    match context.execute(&cli.command) {
        Ok(output) => println!("{}", output),
        Err(e) => {
            error!("Command failed: {}", e);
            eprintln!("{}", map_error(&e));
            process::exit(1);
        }
    }
}

/// Logging table of the loaded configuration, defaults when none was loaded
fn build_logging_config(host: Option<&HostConfig>) -> Result<LoggingConfig, SharedConfError> {
    match host {
        Some(host) => host.logging(),
        None => Ok(LoggingConfig::default()),
    }
}

/// Logging values set by flags; `--quiet` wins over `--log-level` over `--verbose`
fn logging_flags(cli: &Cli) -> LoggingFlags {
    let level = if cli.quiet {
        Some("off".to_string())
    } else if let Some(ref level) = cli.log_level {
        Some(level.clone())
    } else if cli.verbose {
        Some("debug".to_string())
    } else {
        None
    };

    LoggingFlags {
        level,
        format: cli.log_format.clone(),
    }
}
