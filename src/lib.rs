//! Sharedconf: several documentation docsets from one source tree
//!
//! A docset is a variant of a documentation project (api, dev, user, ...) with its
//! own source subdirectory and configuration overrides. The active docset is chosen
//! by an environment variable at build start, then merged into the host
//! configuration before the documentation tool reads it.

pub mod activation;
pub mod cli;
pub mod config;
pub mod docset;
pub mod error;
pub mod logging;

pub use activation::{activate, activate_with, ActiveDocset};
pub use config::{ConfigLoader, HostConfig};
pub use docset::{apply_config, resolve, resolve_with, DocsetRegistry, DocsetSpec, Resolution};
pub use error::SharedConfError;
