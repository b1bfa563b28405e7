use chrono::NaiveDate;
use thiserror::Error;

const DATE_FILTER_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid date format. Expected: YYYY-MM-DD")]
pub struct InvalidDateFormat {
    pub input: String,
}

pub fn parse_date_filter(value: &str) -> Result<NaiveDate, InvalidDateFormat> {
    NaiveDate::parse_from_str(value.trim(), DATE_FILTER_FORMAT).map_err(|_| InvalidDateFormat {
        input: value.to_string(),
    })
}
