use crate::report::constants::{AVERAGE_HEADERS, USER_AGENT_HEADERS};
use clap::ValueEnum;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum ReportKind {
    Average,
    #[value(name = "user_agents")]
    UserAgents,
}

impl ReportKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ReportKind::Average => "average",
            ReportKind::UserAgents => "user_agents",
        }
    }

    /// Column headers, without the leading index column.
    pub fn headers(self) -> &'static [&'static str] {
        match self {
            ReportKind::Average => AVERAGE_HEADERS,
            ReportKind::UserAgents => USER_AGENT_HEADERS,
        }
    }
}

/// Running totals for one endpoint.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct EndpointStat {
    pub count: u64,
    pub total_time: f64,
}

impl EndpointStat {
    pub fn record(&mut self, response_time: f64) {
        self.count += 1;
        self.total_time += response_time;
    }

    pub fn average(&self) -> f64 {
        if self.count == 0 {
            0.0
        } else {
            self.total_time / self.count as f64
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AverageReportRow {
    pub endpoint: String,
    pub request_count: u64,
    pub average_response_time: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserAgentReportRow {
    pub user_agent: String,
    pub count: u64,
}
