//! Utility functions for the CLI.

use crate::config::Config;
use std::path::Path;

/// An explicit `--config` path wins over the platform default location.
///
/// # Errors
/// Returns error if the chosen file exists but cannot be read or parsed.
pub fn load_config(path: Option<&Path>) -> Result<Config, crate::Error> {
    path.map_or_else(Config::load, Config::load_from)
}
