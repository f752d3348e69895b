//! In-memory capture. Keeps every rendered line tagged with the stream it
//! would have gone to, so routing and formatting can be asserted without
//! touching the real stdout/stderr.

use super::{LogRecord, Output, Stream};
use std::sync::{Mutex, MutexGuard, PoisonError};

/// A rendered line plus its destination.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapturedLine {
    pub stream: Stream,
    pub text: String,
}

#[derive(Debug, Default)]
pub struct MemoryOutput {
    lines: Mutex<Vec<CapturedLine>>,
}

impl MemoryOutput {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // A Panic-level write finishes before the unwind starts, so poisoning never loses a line
    fn guard(&self) -> MutexGuard<'_, Vec<CapturedLine>> {
        self.lines.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Snapshot of everything captured so far, in write order.
    #[must_use]
    pub fn lines(&self) -> Vec<CapturedLine> {
        self.guard().clone()
    }

    /// Concatenated text of every line sent to `stream`.
    #[must_use]
    pub fn text(&self, stream: Stream) -> String {
        self.guard()
            .iter()
            .filter(|line| line.stream == stream)
            .map(|line| line.text.as_str())
            .collect()
    }

    #[must_use]
    pub fn stdout(&self) -> String {
        self.text(Stream::Stdout)
    }

    #[must_use]
    pub fn stderr(&self) -> String {
        self.text(Stream::Stderr)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.guard().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.guard().is_empty()
    }

    pub fn clear(&self) {
        self.guard().clear();
    }
}

impl Output for MemoryOutput {
    fn write(&self, record: &LogRecord<'_>) -> Result<(), crate::Error> {
        let line = CapturedLine {
            stream: record.stream(),
            text: record.render(),
        };
        self.guard().push(line);
        Ok(())
    }

    fn flush(&self) -> Result<(), crate::Error> {
        Ok(())
    }
}
