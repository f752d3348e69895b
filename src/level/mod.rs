//! The fixed table of severities: each level decides its label, color,
//! destination stream, and what happens to the process after the write.

use crate::fmt::Color;
use crate::output::Stream;
use std::fmt;
use std::str::FromStr;

/// Derives `Ord` so callers can compare severities (e.g. "anything at Error or above").
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Level {
    /// Development and troubleshooting detail.
    Debug = 0,
    /// General status updates.
    Info = 1,
    /// A successful operation: renders as `OK`, not `OKAY`.
    Okay = 2,
    /// Non-critical issues worth a look.
    Warning = 3,
    /// Failures the caller has handled or will handle.
    Error = 4,
    /// Unrecoverable state: the process exits right after the write.
    Fatal = 5,
    /// Unrecoverable here, maybe recoverable above: unwinds after the write.
    Panic = 6,
}

/// What an emitter does once its line has been written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    /// Return to the caller.
    None,
    /// `process::exit`: destructors on the stack never run.
    Exit,
    /// Unwinding panic carrying the joined message: destructors run on the way up.
    Unwind,
}

impl Level {
    /// Lowercase name used by the CLI and by `FromStr`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Okay => "okay",
            Self::Warning => "warning",
            Self::Error => "error",
            Self::Fatal => "fatal",
            Self::Panic => "panic",
        }
    }

    /// Text placed inside the decorated label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Debug => "DEBUG",
            Self::Info => "INFO",
            Self::Okay => "OK",
            Self::Warning => "WARN",
            Self::Error => "ERROR",
            Self::Fatal => "FATAL",
            Self::Panic => "PANIC",
        }
    }

    #[must_use]
    pub const fn color(self) -> Color {
        match self {
            Self::Debug => Color::Blue,
            Self::Info => Color::Cyan,
            Self::Okay => Color::Green,
            Self::Warning => Color::Yellow,
            Self::Error | Self::Fatal | Self::Panic => Color::Red,
        }
    }

    /// Error and above go to stderr.
    #[must_use]
    pub const fn stream(self) -> Stream {
        match self {
            Self::Debug | Self::Info | Self::Okay | Self::Warning => Stream::Stdout,
            Self::Error | Self::Fatal | Self::Panic => Stream::Stderr,
        }
    }

    #[must_use]
    pub const fn termination(self) -> Termination {
        match self {
            Self::Fatal => Termination::Exit,
            Self::Panic => Termination::Unwind,
            _ => Termination::None,
        }
    }

    /// Every level, lowest severity first.
    #[must_use]
    pub const fn all() -> [Self; 7] {
        [
            Self::Debug,
            Self::Info,
            Self::Okay,
            Self::Warning,
            Self::Error,
            Self::Fatal,
            Self::Panic,
        ]
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned by `FromStr` so callers can distinguish "unknown level" from other parse failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseLevelError(String);

impl fmt::Display for ParseLevelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown log level: '{}'", self.0)
    }
}

impl std::error::Error for ParseLevelError {}

impl FromStr for Level {
    type Err = ParseLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "debug" => Ok(Self::Debug),
            "info" => Ok(Self::Info),
            "okay" | "ok" => Ok(Self::Okay),
            "warning" | "warn" => Ok(Self::Warning),
            "error" | "err" => Ok(Self::Error),
            "fatal" => Ok(Self::Fatal),
            "panic" => Ok(Self::Panic),
            _ => Err(ParseLevelError(s.to_string())),
        }
    }
}
