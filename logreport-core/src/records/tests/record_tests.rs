use crate::records::{DEFAULT_USER_AGENT, LogRecord};
use chrono::NaiveDate;
use serde_json::json;

fn record(value: serde_json::Value) -> LogRecord {
    LogRecord::from_value(value).unwrap()
}

#[test]
fn missing_fields_fall_back_to_defaults() {
    let r = record(json!({}));

    assert_eq!(r.url(), "");
    assert_eq!(r.response_time(), 0.0);
    assert_eq!(r.user_agent(), DEFAULT_USER_AGENT);
    assert_eq!(r.user_agent(), "Unknown");
    assert_eq!(r.timestamp_date(), None);
}

#[test]
fn wrongly_typed_fields_fall_back_to_defaults() {
    let r = record(json!({
        "url": 17,
        "response_time": "slow",
        "http_user_agent": null,
    }));

    assert_eq!(r.url(), "");
    assert_eq!(r.response_time(), 0.0);
    assert_eq!(r.user_agent(), "Unknown");
}

#[test]
fn present_fields_are_returned() {
    let r = record(json!({
        "@timestamp": "2025-06-22T13:57:32+00:00",
        "url": "/api/users",
        "response_time": 0.125,
        "http_user_agent": "curl/8.0",
    }));

    assert_eq!(r.url(), "/api/users");
    assert_eq!(r.response_time(), 0.125);
    assert_eq!(r.user_agent(), "curl/8.0");
    assert_eq!(r.timestamp_date(), NaiveDate::from_ymd_opt(2025, 6, 22));
}

#[test]
fn integer_response_time_is_numeric() {
    let r = record(json!({ "response_time": 2 }));

    assert_eq!(r.response_time(), 2.0);
}

#[test]
fn unknown_fields_are_preserved() {
    let r = LogRecord::parse(r#"{"url": "/a", "status": 404, "extra": {"nested": true}}"#).unwrap();

    assert_eq!(
        serde_json::to_value(&r).unwrap(),
        json!({"url": "/a", "status": 404, "extra": {"nested": true}})
    );
}

#[test]
fn parse_rejects_non_objects() {
    assert!(LogRecord::parse("invalid json line").is_none());
    assert!(LogRecord::parse("\"just a string\"").is_none());
    assert!(LogRecord::parse("[1, 2]").is_none());
    assert!(LogRecord::from_value(json!(3)).is_none());
}
