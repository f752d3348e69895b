//! Tests for the level table.

use conlog::{Color, Level, Stream, Termination};

#[test]
fn level_ordering() {
    assert!(Level::Debug < Level::Info);
    assert!(Level::Info < Level::Okay);
    assert!(Level::Okay < Level::Warning);
    assert!(Level::Warning < Level::Error);
    assert!(Level::Error < Level::Fatal);
    assert!(Level::Fatal < Level::Panic);
}

#[test]
fn level_labels() {
    let labels: Vec<&str> = Level::all().iter().map(|l| l.label()).collect();
    assert_eq!(
        labels,
        ["DEBUG", "INFO", "OK", "WARN", "ERROR", "FATAL", "PANIC"]
    );
}

#[test]
fn okay_renders_ok_not_okay() {
    assert_eq!(Level::Okay.label(), "OK");
    assert_eq!(Level::Okay.as_str(), "okay");
}

#[test]
fn level_colors() {
    assert_eq!(Level::Debug.color(), Color::Blue);
    assert_eq!(Level::Info.color(), Color::Cyan);
    assert_eq!(Level::Okay.color(), Color::Green);
    assert_eq!(Level::Warning.color(), Color::Yellow);
    assert_eq!(Level::Error.color(), Color::Red);
    assert_eq!(Level::Fatal.color(), Color::Red);
    assert_eq!(Level::Panic.color(), Color::Red);
}

#[test]
fn level_streams() {
    for level in [Level::Debug, Level::Info, Level::Okay, Level::Warning] {
        assert_eq!(level.stream(), Stream::Stdout, "{level}");
    }
    for level in [Level::Error, Level::Fatal, Level::Panic] {
        assert_eq!(level.stream(), Stream::Stderr, "{level}");
    }
}

#[test]
fn level_termination() {
    assert_eq!(Level::Fatal.termination(), Termination::Exit);
    assert_eq!(Level::Panic.termination(), Termination::Unwind);
    for level in [
        Level::Debug,
        Level::Info,
        Level::Okay,
        Level::Warning,
        Level::Error,
    ] {
        assert_eq!(level.termination(), Termination::None, "{level}");
    }
}

#[test]
fn level_display() {
    assert_eq!(Level::Debug.to_string(), "debug");
    assert_eq!(Level::Okay.to_string(), "okay");
    assert_eq!(Level::Warning.to_string(), "warning");
    assert_eq!(Level::Panic.to_string(), "panic");
}

#[test]
fn level_from_str() {
    assert_eq!("debug".parse::<Level>().unwrap(), Level::Debug);
    assert_eq!("INFO".parse::<Level>().unwrap(), Level::Info);
    assert_eq!("ok".parse::<Level>().unwrap(), Level::Okay);
    assert_eq!("Okay".parse::<Level>().unwrap(), Level::Okay);
    assert_eq!("warn".parse::<Level>().unwrap(), Level::Warning);
    assert_eq!("err".parse::<Level>().unwrap(), Level::Error);
    assert_eq!("fatal".parse::<Level>().unwrap(), Level::Fatal);
    assert_eq!("panic".parse::<Level>().unwrap(), Level::Panic);
}

#[test]
fn level_from_str_invalid() {
    let err = "trace".parse::<Level>().unwrap_err();
    assert!(err.to_string().contains("trace"));
}
