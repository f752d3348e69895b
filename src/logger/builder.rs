//! Stepwise construction so the output can be swapped without exposing `Logger` fields.

use super::Logger;
use crate::fmt::Style;
use crate::output::{Output, TerminalOutput};

/// Without an explicit output the logger writes to the terminal.
#[derive(Default)]
pub struct LoggerBuilder {
    style: Style,
    output: Option<Box<dyn Output>>,
}

impl LoggerBuilder {
    /// Brackets style, terminal output.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    /// Replaces the terminal with any other sink (e.g. a `MemoryOutput` in tests).
    #[must_use]
    pub fn output(mut self, output: impl Output + 'static) -> Self {
        self.output = Some(Box::new(output));
        self
    }

    #[must_use]
    pub fn build(self) -> Logger {
        Logger {
            style: self.style,
            output: self
                .output
                .unwrap_or_else(|| Box::new(TerminalOutput::new())),
        }
    }
}
