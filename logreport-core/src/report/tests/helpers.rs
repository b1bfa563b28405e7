use crate::records::LogRecord;
use serde_json::{Value, json};

pub fn record(value: Value) -> LogRecord {
    LogRecord::from_value(value).unwrap()
}

pub fn timed(url: &str, response_time: f64) -> LogRecord {
    record(json!({ "url": url, "response_time": response_time }))
}

pub fn agent(user_agent: &str) -> LogRecord {
    record(json!({ "http_user_agent": user_agent }))
}
