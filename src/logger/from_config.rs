//! Builds a `Logger` from a loaded [`Config`].

use super::Logger;
use crate::config::Config;
use crate::output::{Output, TerminalOutput};

impl Logger {
    /// Terminal logger with the configured style. An unknown style name falls
    /// back to brackets and is reported as a Warning on stdout.
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        Self::from_config_with(config, TerminalOutput::new())
    }

    /// Like [`Logger::from_config`] but writing to `output`.
    #[must_use]
    pub fn from_config_with(config: &Config, output: impl Output + 'static) -> Self {
        let mut logger = Self::builder().output(output).build();
        logger.apply_style(&config.general.style);
        logger
    }
}
