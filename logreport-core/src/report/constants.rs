pub const NO_DATA_MESSAGE: &str = "No data to display";

pub const INDEX_HEADER: &str = "№";
pub const AVERAGE_HEADERS: &[&str] = &["endpoint", "request_count", "avg_time"];
pub const USER_AGENT_HEADERS: &[&str] = &["user_agent", "count"];

/// Decimal places kept in `average_response_time`.
pub const AVERAGE_PRECISION: usize = 3;
