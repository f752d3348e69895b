//! Everything that turns a level and a list of values into text: the palette,
//! label decoration, and the UTC timestamp used by the timed emitters.

mod color;
mod label;
mod timestamp;

pub use color::Color;
pub use label::{ParseStyleError, Style, format_label};
pub use timestamp::{TIMESTAMP_FORMAT, format_timestamp, timestamp};
