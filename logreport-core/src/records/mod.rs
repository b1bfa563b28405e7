//! Log ingestion
//!
//! Turns JSON Lines files into an ordered list of [`LogRecord`]s:
//!
//! file
//! parse_line
//! (date filter)
//! LogRecord
//!
//! Lines that are blank, not valid UTF-8, or not a JSON object are dropped
//! without a trace. So are records that fail the date filter, including ones
//! whose `@timestamp` is missing or cannot be parsed.

mod constants;
mod error;
mod reader;
mod timestamp;
mod types;

#[cfg(test)]
mod tests;

pub use constants::*;
pub use error::ReadError;
pub use reader::{parse_line, read_logs};
pub use timestamp::parse_iso_date;
pub use types::LogRecord;
