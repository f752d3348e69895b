//! Terminal is the default output: stdout for routine levels, stderr from Error up.

use super::{LogRecord, Output, Stream};
use std::io::{self, Write};

/// Writes each rendered line to the level's standard stream.
#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalOutput;

impl TerminalOutput {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Output for TerminalOutput {
    fn write(&self, record: &LogRecord<'_>) -> Result<(), crate::Error> {
        // The whole line is assembled up front so it reaches the stream in one write
        let line = record.render();

        match record.stream() {
            Stream::Stdout => io::stdout().lock().write_all(line.as_bytes())?,
            Stream::Stderr => io::stderr().lock().write_all(line.as_bytes())?,
        }

        Ok(())
    }

    fn flush(&self) -> Result<(), crate::Error> {
        io::stdout().flush()?;
        io::stderr().flush()?;
        Ok(())
    }
}
