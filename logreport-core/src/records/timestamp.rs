use chrono::{NaiveDate, NaiveTime};

const DATE_SEPARATORS: [char; 2] = ['T', ' '];

const CLOCK_FORMATS: &[&str] = &["%H:%M:%S%.f", "%H:%M", "%H%M%S%.f", "%H%M"];

/// Extracts the calendar date from an ISO-8601 timestamp.
///
/// The date is the one written in the string, whatever the offset says:
/// `2025-06-22T23:30:00-05:00` is on the 22nd even though it is already the
/// 23rd in UTC. The time and offset, when present, must still be well formed.
///
/// Accepted shapes:
/// - date: `2025-06-22` or `20250622`
/// - time: `13`, `13:57`, `13:57:32`, `13:57:32.123`, `1357`, `135732`
/// - offset: `Z`, `+05`, `+05:30`, `+0530`, `+05:30:15`
pub fn parse_iso_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();

    let (date, time) = match value.find(DATE_SEPARATORS) {
        Some(i) => (&value[..i], Some(&value[i + 1..])),
        None => (value, None),
    };

    let date = parse_date_part(date)?;

    match time {
        Some(time) if !is_valid_time_part(time) => None,
        _ => Some(date),
    }
}

fn parse_date_part(date: &str) -> Option<NaiveDate> {
    match date.len() {
        10 => NaiveDate::parse_from_str(date, "%Y-%m-%d").ok(),
        8 if date.bytes().all(|b| b.is_ascii_digit()) => NaiveDate::from_ymd_opt(
            date[..4].parse().ok()?,
            date[4..6].parse().ok()?,
            date[6..].parse().ok()?,
        ),
        _ => None,
    }
}

fn is_valid_time_part(time: &str) -> bool {
    let (clock, offset) = if let Some(clock) = time.strip_suffix('Z') {
        (clock, None)
    } else {
        match time.rfind(['+', '-']) {
            Some(i) => (&time[..i], Some(&time[i + 1..])),
            None => (time, None),
        }
    };

    is_valid_clock(clock) && offset.is_none_or(is_valid_clock)
}

fn is_valid_clock(clock: &str) -> bool {
    if clock.len() == 2 && clock.bytes().all(|b| b.is_ascii_digit()) {
        return clock.parse::<u32>().is_ok_and(|hour| hour < 24);
    }

    CLOCK_FORMATS
        .iter()
        .any(|fmt| NaiveTime::parse_from_str(clock, fmt).is_ok())
}
