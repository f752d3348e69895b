//! CLI module for conlog.
//!
//! One invocation emits one message, so shell scripts get the same labels
//! and colors as Rust callers.

pub mod util;

use crate::level::Level;
use crate::logger::Logger;
use clap::Parser;
use std::fmt::Display;
use std::path::PathBuf;
use std::process::ExitCode;

pub use util::load_config;

/// Log level for CLI arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum LogLevel {
    Debug,
    Info,
    #[value(alias = "ok")]
    Okay,
    #[value(alias = "warn")]
    Warning,
    #[value(alias = "err")]
    Error,
    Fatal,
    Panic,
}

impl From<LogLevel> for Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Debug => Self::Debug,
            LogLevel::Info => Self::Info,
            LogLevel::Okay => Self::Okay,
            LogLevel::Warning => Self::Warning,
            LogLevel::Error => Self::Error,
            LogLevel::Fatal => Self::Fatal,
            LogLevel::Panic => Self::Panic,
        }
    }
}

/// conlog - Print a colorized, leveled message.
#[derive(Debug, Parser)]
#[command(name = "conlog", version, about = "Print a colorized, leveled message")]
pub struct Cli {
    /// Label style: brackets or colon (overrides the config file)
    #[arg(long, env = "CONLOG_STYLE", value_name = "STYLE")]
    pub style: Option<String>,
    /// Prefix the message with the current UTC time
    #[arg(short, long)]
    pub timed: bool,
    /// Config file to read instead of the default location
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,
    /// Log level
    #[arg(value_enum)]
    pub level: LogLevel,
    /// Message words, joined by single spaces
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub message: Vec<String>,
}

/// Loads config, applies flag overrides, and emits the message.
///
/// Fatal never returns from here; Panic unwinds out of it.
#[must_use]
pub fn run(cli: &Cli) -> ExitCode {
    let mut config = match load_config(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            crate::global::error(&[&"Error loading config:", &e]);
            return ExitCode::FAILURE;
        }
    };

    if let Some(style) = &cli.style {
        config.general.style.clone_from(style);
    }
    if cli.timed {
        config.general.timestamps = true;
    }

    let logger = Logger::from_config(&config);
    let values: Vec<&dyn Display> = cli.message.iter().map(|word| word as &dyn Display).collect();
    let level = Level::from(cli.level);

    if config.general.timestamps {
        logger.log_timed(level, &values);
    } else {
        logger.log(level, &values);
    }

    ExitCode::SUCCESS
}
