pub const TIMESTAMP_FIELD: &str = "@timestamp";
pub const URL_FIELD: &str = "url";
pub const RESPONSE_TIME_FIELD: &str = "response_time";
pub const USER_AGENT_FIELD: &str = "http_user_agent";

pub const DEFAULT_URL: &str = "";
pub const DEFAULT_RESPONSE_TIME: f64 = 0.0;
pub const DEFAULT_USER_AGENT: &str = "Unknown";
