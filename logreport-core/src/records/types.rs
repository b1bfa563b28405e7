use crate::records::constants::{
    DEFAULT_RESPONSE_TIME, DEFAULT_URL, DEFAULT_USER_AGENT, RESPONSE_TIME_FIELD, TIMESTAMP_FIELD,
    URL_FIELD, USER_AGENT_FIELD,
};
use crate::records::timestamp::parse_iso_date;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One JSON object read from a log line.
///
/// Every field is kept, even though reports only look at a handful of them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LogRecord(Map<String, Value>);

impl LogRecord {
    /// Parses a single line. Anything but a JSON object yields `None`.
    pub fn parse(line: &str) -> Option<Self> {
        serde_json::from_str(line).ok()
    }

    #[cfg(test)]
    pub(crate) fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Object(map) => Some(Self(map)),
            _ => None,
        }
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// String field, or `default` when it is absent or not a string.
    pub fn str_or<'a>(&'a self, key: &str, default: &'a str) -> &'a str {
        self.get(key).and_then(Value::as_str).unwrap_or(default)
    }

    /// Numeric field, or `default` when it is absent or not a number.
    pub fn f64_or(&self, key: &str, default: f64) -> f64 {
        self.get(key).and_then(Value::as_f64).unwrap_or(default)
    }

    pub fn url(&self) -> &str {
        self.str_or(URL_FIELD, DEFAULT_URL)
    }

    pub fn response_time(&self) -> f64 {
        self.f64_or(RESPONSE_TIME_FIELD, DEFAULT_RESPONSE_TIME)
    }

    pub fn user_agent(&self) -> &str {
        self.str_or(USER_AGENT_FIELD, DEFAULT_USER_AGENT)
    }

    /// Calendar date of `@timestamp`, as written in the record's own offset.
    pub fn timestamp_date(&self) -> Option<NaiveDate> {
        self.get(TIMESTAMP_FIELD)
            .and_then(Value::as_str)
            .and_then(parse_iso_date)
    }
}
