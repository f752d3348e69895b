//! The fixed ANSI palette. Plain SGR codes rather than 24-bit color so the
//! output renders on any terminal that understands the basic eight colors.

/// Fixed palette, one entry per level family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Red,
    Green,
    Yellow,
    Blue,
    Cyan,
}

impl Color {
    /// Terminates any active SGR styling so subsequent text returns to the terminal default.
    pub const RESET: &'static str = "\x1b[0m";

    /// Raw foreground escape for this color.
    #[must_use]
    pub const fn fg_ansi(self) -> &'static str {
        match self {
            Self::Red => "\x1b[31m",
            Self::Green => "\x1b[32m",
            Self::Yellow => "\x1b[33m",
            Self::Blue => "\x1b[34m",
            Self::Cyan => "\x1b[0;36m",
        }
    }
}

