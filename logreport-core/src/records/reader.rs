use crate::records::error::ReadError;
use crate::records::types::LogRecord;
use chrono::NaiveDate;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::debug;

/// Reads every file in order and returns the records that survive parsing
/// and the optional date filter.
///
/// Records keep file order, then line order. Only I/O failures are errors.
pub fn read_logs<P: AsRef<Path>>(
    paths: &[P],
    date_filter: Option<NaiveDate>,
) -> Result<Vec<LogRecord>, ReadError> {
    let mut records = Vec::new();

    for path in paths {
        read_file(path.as_ref(), date_filter, &mut records)?;
    }

    Ok(records)
}

fn read_file(
    path: &Path,
    date_filter: Option<NaiveDate>,
    records: &mut Vec<LogRecord>,
) -> Result<(), ReadError> {
    let file = File::open(path).map_err(|e| ReadError::open(path, e))?;
    let reader = BufReader::new(file);
    let before = records.len();

    debug!(path = %path.display(), "reading log file");

    for line in reader.split(b'\n') {
        let line = line.map_err(|e| ReadError::read(path, e))?;

        let Ok(line) = std::str::from_utf8(&line) else {
            continue;
        };

        if let Some(record) = parse_line(line, date_filter) {
            records.push(record);
        }
    }

    debug!(
        path = %path.display(),
        records = records.len() - before,
        "finished log file"
    );

    Ok(())
}

/// Parses one line into a record, applying the date filter if present.
pub fn parse_line(line: &str, date_filter: Option<NaiveDate>) -> Option<LogRecord> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }

    let record = LogRecord::parse(line)?;

    if let Some(date) = date_filter {
        // No usable @timestamp counts as a parse failure.
        if record.timestamp_date()? != date {
            return None;
        }
    }

    Some(record)
}
