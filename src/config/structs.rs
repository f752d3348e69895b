//! Configuration struct definitions.

use serde::Deserialize;

/// `[general]` section.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct GeneralConfig {
    /// Label style name, `brackets` or `colon`. Unknown names fall back to brackets.
    pub style: String,
    /// Prefix every line with a UTC timestamp.
    pub timestamps: bool,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            style: "brackets".to_string(),
            timestamps: false,
        }
    }
}
