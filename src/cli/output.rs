//! CLI output: error mapping from domain errors to stable CLI surface.

use crate::error::SharedConfError;

/// Map domain errors to a string for CLI output.
pub fn map_error(e: &SharedConfError) -> String {
    format!("error: {}", e)
}
