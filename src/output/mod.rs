//! Where rendered lines go. The terminal is the only real destination; the
//! `Output` trait exists so tests and embedders can capture lines instead.

mod memory;
mod terminal;

pub use memory::{CapturedLine, MemoryOutput};
pub use terminal::TerminalOutput;

use crate::fmt::{Color, Style, format_label};
use crate::level::Level;
use std::fmt::{self, Display, Write as _};
use std::sync::Arc;

/// The two standard streams a level can be routed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stream {
    Stdout,
    Stderr,
}

impl fmt::Display for Stream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Stdout => f.write_str("stdout"),
            Self::Stderr => f.write_str("stderr"),
        }
    }
}

/// One log call, borrowed from the caller for the duration of the write and never kept.
#[derive(Clone, Copy)]
pub struct LogRecord<'a> {
    pub level: Level,
    /// Captured once per call so a record never mixes styles.
    pub style: Style,
    pub args: &'a [&'a dyn Display],
}

impl<'a> LogRecord<'a> {
    #[must_use]
    pub const fn new(level: Level, style: Style, args: &'a [&'a dyn Display]) -> Self {
        Self { level, style, args }
    }

    #[must_use]
    pub const fn stream(&self) -> Stream {
        self.level.stream()
    }

    /// Newline separator, color escape, and decorated label: the first element of the line.
    #[must_use]
    pub fn prefix(&self) -> String {
        format!(
            "\n{}{}",
            self.level.color().fg_ansi(),
            format_label(self.level, self.style)
        )
    }

    /// Caller values joined by single spaces; no label, color, or newline.
    /// This is also the payload carried by a Panic-level unwind.
    #[must_use]
    pub fn message(&self) -> String {
        let mut message = String::new();
        for (i, arg) in self.args.iter().enumerate() {
            if i > 0 {
                message.push(' ');
            }
            let _ = write!(message, "{arg}");
        }
        message
    }

    /// The full line: prefix, values, and reset code joined by spaces, newline-terminated.
    #[must_use]
    pub fn render(&self) -> String {
        let mut line = self.prefix();
        for arg in self.args {
            let _ = write!(line, " {arg}");
        }
        line.push(' ');
        line.push_str(Color::RESET);
        line.push('\n');
        line
    }
}

/// `Send + Sync` so a `Logger` can be shared across threads behind the caller's own lock.
pub trait Output: Send + Sync {
    /// Renders and delivers one record: implementations must do so with a single write.
    ///
    /// # Errors
    /// I/O errors from the underlying stream.
    fn write(&self, record: &LogRecord<'_>) -> Result<(), crate::Error>;

    /// Pushes out anything the stream buffered. Called before a Fatal exit.
    ///
    /// # Errors
    /// I/O errors from the underlying stream.
    fn flush(&self) -> Result<(), crate::Error>;
}

/// Lets a test keep a handle to a `MemoryOutput` after handing it to a logger.
impl<T: Output + ?Sized> Output for Arc<T> {
    fn write(&self, record: &LogRecord<'_>) -> Result<(), crate::Error> {
        (**self).write(record)
    }

    fn flush(&self) -> Result<(), crate::Error> {
        (**self).flush()
    }
}
