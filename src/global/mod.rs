//! Process-wide default logger, used by the free functions here and by the
//! crate's macros.
//!
//! Only the style is shared; each call builds a throwaway terminal `Logger`
//! from it. The style lives in a relaxed atomic: memory-safe from any thread,
//! but a `set_style` on one thread is not ordered against emitters on another.
//! Callers that need that ordering serialize access themselves.

use crate::fmt::Style;
use crate::level::Level;
use crate::logger::Logger;
use std::fmt::Display;
use std::sync::atomic::{AtomicU8, Ordering};

static STYLE: AtomicU8 = AtomicU8::new(Style::Brackets as u8);

/// Style currently used by the free functions and macros.
#[must_use]
pub fn style() -> Style {
    decode(STYLE.load(Ordering::Relaxed))
}

/// Only `Style as u8` is ever stored, so a miss means the state is corrupt.
/// Report it and carry on with brackets rather than poisoning every later call.
fn decode(raw: u8) -> Style {
    Style::from_repr(raw).unwrap_or_else(|| {
        Logger::builder()
            .style(Style::Brackets)
            .build()
            .error(&[&"Unreachable code reached!"]);
        Style::Brackets
    })
}

/// Changes the process-wide style by name; see [`Logger::set_style`] for the
/// confirmation and fallback lines this prints.
pub fn set_style(name: &str) -> Style {
    let mut logger = logger();
    let style = logger.set_style(name);
    STYLE.store(style as u8, Ordering::Relaxed);
    style
}

fn logger() -> Logger {
    Logger::builder().style(style()).build()
}

#[track_caller]
pub fn log(level: Level, args: &[&dyn Display]) {
    logger().log(level, args);
}

#[track_caller]
pub fn log_timed(level: Level, args: &[&dyn Display]) {
    logger().log_timed(level, args);
}

pub fn debug(args: &[&dyn Display]) {
    logger().debug(args);
}

pub fn info(args: &[&dyn Display]) {
    logger().info(args);
}

pub fn okay(args: &[&dyn Display]) {
    logger().okay(args);
}

pub fn warning(args: &[&dyn Display]) {
    logger().warning(args);
}

pub fn error(args: &[&dyn Display]) {
    logger().error(args);
}

/// Exits the process without unwinding; see [`Logger::fatal`].
pub fn fatal(args: &[&dyn Display]) -> ! {
    logger().fatal(args)
}

/// Unwinds with the joined values as payload; see [`Logger::panic`].
#[track_caller]
pub fn panic(args: &[&dyn Display]) -> ! {
    logger().panic(args)
}

pub fn timed_debug(args: &[&dyn Display]) {
    logger().timed_debug(args);
}

pub fn timed_info(args: &[&dyn Display]) {
    logger().timed_info(args);
}

pub fn timed_okay(args: &[&dyn Display]) {
    logger().timed_okay(args);
}

pub fn timed_warning(args: &[&dyn Display]) {
    logger().timed_warning(args);
}

pub fn timed_error(args: &[&dyn Display]) {
    logger().timed_error(args);
}

pub fn timed_fatal(args: &[&dyn Display]) -> ! {
    logger().timed_fatal(args)
}

#[track_caller]
pub fn timed_panic(args: &[&dyn Display]) -> ! {
    logger().timed_panic(args)
}
