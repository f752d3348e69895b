//! `conlog` - Minimal colorized console logging.
//!
//! Seven levels, each with a fixed label, color, and stream:
//!
//! | level   | label | color  | stream | afterwards          |
//! |---------|-------|--------|--------|---------------------|
//! | debug   | DEBUG | blue   | stdout |                     |
//! | info    | INFO  | cyan   | stdout |                     |
//! | okay    | OK    | green  | stdout |                     |
//! | warning | WARN  | yellow | stdout |                     |
//! | error   | ERROR | red    | stderr |                     |
//! | fatal   | FATAL | red    | stderr | process exits (255) |
//! | panic   | PANIC | red    | stderr | unwinding panic     |
//!
//! Labels render as `[INFO]` (brackets, the default) or `INFO:` (colon).
//! Every level also has a `timed_` variant that prefixes the values with the
//! current UTC time as `YYYY/MM/DD HH:MM:SS`.
//!
//! # Example
//!
//! ```
//! use conlog::{Logger, MemoryOutput, Style};
//! use std::sync::Arc;
//!
//! let capture = Arc::new(MemoryOutput::new());
//! let logger = Logger::builder()
//!     .style(Style::Colon)
//!     .output(Arc::clone(&capture))
//!     .build();
//!
//! logger.info(&[&"Processing", &3, &"items"]);
//! assert!(capture.stdout().contains("INFO: Processing 3 items"));
//! ```
//!
//! For quick scripts the process-wide logger is reachable through macros:
//!
//! ```no_run
//! conlog::okay!("Backup completed");
//! conlog::timed_error!("Connection timeout after", 30, "s");
//! ```
//!
//! # Features
//!
//! - `cli` (default): Enables the `conlog` binary

pub mod config;
pub mod fmt;
pub mod global;
pub mod level;
pub mod logger;
pub mod output;

mod error;
mod macros;

#[cfg(feature = "cli")]
pub mod cli;

pub use config::Config;
pub use error::Error;
pub use fmt::{Color, ParseStyleError, Style, format_label};
pub use level::{Level, ParseLevelError, Termination};
pub use logger::{FATAL_EXIT_CODE, Logger, LoggerBuilder};
pub use output::{LogRecord, MemoryOutput, Output, Stream, TerminalOutput};
