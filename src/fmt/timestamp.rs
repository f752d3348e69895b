//! Timestamps for the timed emitters. Always UTC, so lines from machines in
//! different zones sort and compare without conversion.

use chrono::{DateTime, Utc};

/// strftime pattern for `YYYY/MM/DD HH:MM:SS`.
pub const TIMESTAMP_FORMAT: &str = "%Y/%m/%d %H:%M:%S";

/// Current instant, UTC.
#[must_use]
pub fn timestamp() -> String {
    format_timestamp(Utc::now())
}

#[must_use]
pub fn format_timestamp(at: DateTime<Utc>) -> String {
    at.format(TIMESTAMP_FORMAT).to_string()
}
