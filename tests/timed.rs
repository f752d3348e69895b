//! Tests for the timestamp-prefixing emitters.

use chrono::{NaiveDateTime, TimeDelta, TimeZone, Utc};
use conlog::fmt::{TIMESTAMP_FORMAT, format_timestamp};
use conlog::{Level, Logger, MemoryOutput, Stream, Style};
use std::sync::Arc;

fn capture(style: Style) -> (Logger, Arc<MemoryOutput>) {
    let output = Arc::new(MemoryOutput::new());
    let logger = Logger::builder()
        .style(style)
        .output(Arc::clone(&output))
        .build();
    (logger, output)
}

/// Splits the 19-char timestamp off whatever follows `label`.
fn split_stamp<'a>(text: &'a str, label: &str) -> (&'a str, &'a str) {
    let start = text.find(label).expect("label present") + label.len();
    text[start..].split_at(19)
}

#[test]
fn format_timestamp_layout() {
    let at = Utc.with_ymd_and_hms(2006, 1, 2, 15, 4, 5).unwrap();
    assert_eq!(format_timestamp(at), "2006/01/02 15:04:05");
}

#[test]
fn timed_info_prefixes_current_utc_time() {
    let (logger, output) = capture(Style::Brackets);

    let before = Utc::now();
    logger.timed_info(&[&"user logged in"]);
    let after = Utc::now();

    let text = output.stdout();
    let (stamp, rest) = split_stamp(&text, "[INFO] ");
    assert_eq!(rest, " user logged in \x1b[0m\n");

    let parsed = NaiveDateTime::parse_from_str(stamp, TIMESTAMP_FORMAT)
        .expect("timestamp parses")
        .and_utc();
    assert!(parsed >= before - TimeDelta::seconds(1), "{parsed} vs {before}");
    assert!(parsed <= after, "{parsed} vs {after}");
}

#[test]
fn timestamp_shape() {
    let (logger, output) = capture(Style::Colon);
    logger.timed_okay(&[&"Backup completed"]);

    let text = output.stdout();
    let (stamp, _) = split_stamp(&text, "OK: ");
    for (i, c) in stamp.chars().enumerate() {
        match i {
            4 | 7 => assert_eq!(c, '/'),
            10 => assert_eq!(c, ' '),
            13 | 16 => assert_eq!(c, ':'),
            _ => assert!(c.is_ascii_digit(), "{stamp}"),
        }
    }
}

#[test]
fn timed_variants_keep_level_routing() {
    let (logger, output) = capture(Style::Brackets);
    logger.timed_debug(&[&"d"]);
    logger.timed_info(&[&"i"]);
    logger.timed_okay(&[&"o"]);
    logger.timed_warning(&[&"w"]);
    logger.timed_error(&[&"e"]);

    let streams: Vec<Stream> = output.lines().iter().map(|line| line.stream).collect();
    assert_eq!(
        streams,
        [
            Stream::Stdout,
            Stream::Stdout,
            Stream::Stdout,
            Stream::Stdout,
            Stream::Stderr
        ]
    );
    assert!(output.stderr().contains("\x1b[31m[ERROR] "));
}

#[test]
fn timed_with_no_values_is_just_the_stamp() {
    let (logger, output) = capture(Style::Brackets);
    logger.log_timed(Level::Warning, &[]);

    let text = output.stdout();
    let (_, rest) = split_stamp(&text, "[WARN] ");
    assert_eq!(rest, " \x1b[0m\n");
}

#[test]
fn timed_keeps_all_caller_values_in_order() {
    let (logger, output) = capture(Style::Brackets);
    let key = "user123";
    logger.timed_debug(&[&"Cache miss for key:", &key]);

    let text = output.stdout();
    let (_, rest) = split_stamp(&text, "[DEBUG] ");
    assert_eq!(rest, " Cache miss for key: user123 \x1b[0m\n");
}
