//! The level writer. A `Logger` owns its label style and its output, so two
//! loggers in one process never see each other's style changes.

mod builder;
mod from_config;

pub use builder::LoggerBuilder;

use crate::fmt::{self, Style};
use crate::level::{Level, Termination};
use crate::output::{LogRecord, Output};
use std::fmt::Display;
use std::process;

/// Status passed to `process::exit` by Fatal-level calls. Unix hosts report it as 255.
pub const FATAL_EXIT_CODE: i32 = -1;

/// Mutating the style needs `&mut self`; share a logger across threads behind your own lock.
pub struct Logger {
    style: Style,
    output: Box<dyn Output>,
}

impl Default for Logger {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl Logger {
    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }

    #[must_use]
    pub const fn style(&self) -> Style {
        self.style
    }

    /// Switches label style by name and confirms the change with an Okay line.
    ///
    /// Unknown names fall back to [`Style::Brackets`] and produce a Warning
    /// naming the rejected input instead. Returns the style now in effect.
    pub fn set_style(&mut self, name: &str) -> Style {
        match name.parse::<Style>() {
            Ok(style) => {
                self.style = style;
                self.okay(&[&format!("Logger style set to `{style}`.")]);
            }
            Err(e) => self.reject_style(e.input()),
        }
        self.style
    }

    /// Same fallback as [`Logger::set_style`], but silent when the name is valid.
    pub fn apply_style(&mut self, name: &str) -> Style {
        match name.parse::<Style>() {
            Ok(style) => self.style = style,
            Err(e) => self.reject_style(e.input()),
        }
        self.style
    }

    // Style is reset before the warning is written, so the warning itself always renders.
    // Exact wording, including "does not exists", is part of the output contract.
    fn reject_style(&mut self, name: &str) {
        self.style = Style::Brackets;
        self.warning(&[&format!(
            "Logger style {name} does not exists, setting to default instead!"
        )]);
    }

    /// Stream failures are ignored.
    fn write<'a>(&self, level: Level, args: &'a [&'a dyn Display]) -> LogRecord<'a> {
        let record = LogRecord::new(level, self.style, args);
        let _ = self.output.write(&record);
        record
    }

    /// Core dispatch: writes the line, then applies the level's termination.
    #[track_caller]
    pub fn log(&self, level: Level, args: &[&dyn Display]) {
        match level.termination() {
            Termination::None => {
                self.write(level, args);
            }
            Termination::Exit => self.fatal(args),
            Termination::Unwind => self.panic(args),
        }
    }

    /// [`Logger::log`] with the current UTC time as the first value.
    #[track_caller]
    pub fn log_timed(&self, level: Level, args: &[&dyn Display]) {
        let stamp = fmt::timestamp();
        self.log(level, &stamped(&stamp, args));
    }

    pub fn debug(&self, args: &[&dyn Display]) {
        self.log(Level::Debug, args);
    }

    pub fn info(&self, args: &[&dyn Display]) {
        self.log(Level::Info, args);
    }

    pub fn okay(&self, args: &[&dyn Display]) {
        self.log(Level::Okay, args);
    }

    pub fn warning(&self, args: &[&dyn Display]) {
        self.log(Level::Warning, args);
    }

    pub fn error(&self, args: &[&dyn Display]) {
        self.log(Level::Error, args);
    }

    /// Writes to stderr and exits with [`FATAL_EXIT_CODE`].
    ///
    /// `process::exit` does not unwind: `Drop` impls further up the stack never
    /// run. Use [`Logger::panic`] when cleanup must happen.
    pub fn fatal(&self, args: &[&dyn Display]) -> ! {
        self.write(Level::Fatal, args);
        let _ = self.output.flush();
        process::exit(FATAL_EXIT_CODE)
    }

    /// Writes to stderr, then panics with the values joined by spaces as a `String` payload.
    ///
    /// Destructors run while unwinding and `catch_unwind` can recover it. The
    /// panic is reported at the caller's location.
    #[track_caller]
    pub fn panic(&self, args: &[&dyn Display]) -> ! {
        let message = self.write(Level::Panic, args).message();
        std::panic::panic_any(message)
    }

    pub fn timed_debug(&self, args: &[&dyn Display]) {
        self.log_timed(Level::Debug, args);
    }

    pub fn timed_info(&self, args: &[&dyn Display]) {
        self.log_timed(Level::Info, args);
    }

    pub fn timed_okay(&self, args: &[&dyn Display]) {
        self.log_timed(Level::Okay, args);
    }

    pub fn timed_warning(&self, args: &[&dyn Display]) {
        self.log_timed(Level::Warning, args);
    }

    pub fn timed_error(&self, args: &[&dyn Display]) {
        self.log_timed(Level::Error, args);
    }

    pub fn timed_fatal(&self, args: &[&dyn Display]) -> ! {
        let stamp = fmt::timestamp();
        self.fatal(&stamped(&stamp, args))
    }

    #[track_caller]
    pub fn timed_panic(&self, args: &[&dyn Display]) -> ! {
        let stamp = fmt::timestamp();
        self.panic(&stamped(&stamp, args))
    }
}

/// Puts the timestamp in front of the caller's values.
fn stamped<'a>(stamp: &'a dyn Display, args: &[&'a dyn Display]) -> Vec<&'a dyn Display> {
    let mut values = Vec::with_capacity(args.len() + 1);
    values.push(stamp);
    values.extend_from_slice(args);
    values
}
