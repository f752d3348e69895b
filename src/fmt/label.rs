//! Label decoration. Two conventions exist in the wild (`[INFO]` and `INFO:`);
//! the style picks one and every label in a message follows it.

use crate::level::Level;
use std::fmt;
use std::str::FromStr;

/// How a level label is decorated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum Style {
    /// `[INFO]`
    #[default]
    Brackets = 0,
    /// `INFO:`
    Colon = 1,
}

impl Style {
    /// Name accepted by `FromStr` and printed in style confirmations.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Brackets => "brackets",
            Self::Colon => "colon",
        }
    }

    /// Inverse of `as u8`: `None` for any byte no variant maps to.
    #[must_use]
    pub const fn from_repr(raw: u8) -> Option<Self> {
        match raw {
            0 => Some(Self::Brackets),
            1 => Some(Self::Colon),
            _ => None,
        }
    }

    /// Wraps arbitrary label text in this style's delimiters.
    #[must_use]
    pub fn decorate(self, text: &str) -> String {
        match self {
            Self::Brackets => format!("[{text}]"),
            Self::Colon => format!("{text}:"),
        }
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Carries the rejected input so the fallback warning can name it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseStyleError(String);

impl ParseStyleError {
    /// The name that didn't match any style.
    #[must_use]
    pub fn input(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ParseStyleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown logger style: '{}'", self.0)
    }
}

impl std::error::Error for ParseStyleError {}

/// Exact, case-sensitive match: `"Colon"` is rejected like any other unknown name.
impl FromStr for Style {
    type Err = ParseStyleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "brackets" => Ok(Self::Brackets),
            "colon" => Ok(Self::Colon),
            _ => Err(ParseStyleError(s.to_string())),
        }
    }
}

/// Decorated, uncolored label for `level` under `style`: `[ERROR]` or `ERROR:`.
#[must_use]
pub fn format_label(level: Level, style: Style) -> String {
    style.decorate(level.label())
}
