//! Shell front end: one invocation, one message.
//!
//! Usage:
//!   conlog [--style <brackets|colon>] [--timed] [--config <PATH>] <LEVEL> [MESSAGE]...
//!
//! `fatal` exits with status 255 and `panic` aborts with Rust's panic status.

use clap::Parser;
use conlog::cli::{Cli, run};
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();
    run(&cli)
}
