use crate::records::LogRecord;
use crate::report::average::generate_average_report;
use crate::report::render::{OutputFormat, render_json, render_table};
use crate::report::types::{AverageReportRow, ReportKind, UserAgentReportRow};
use crate::report::user_agents::generate_user_agents_report;

/// A generated report of either kind.
#[derive(Debug, Clone, PartialEq)]
pub enum Report {
    Average(Vec<AverageReportRow>),
    UserAgents(Vec<UserAgentReportRow>),
}

impl Report {
    pub fn generate(kind: ReportKind, records: &[LogRecord]) -> Self {
        match kind {
            ReportKind::Average => Report::Average(generate_average_report(records)),
            ReportKind::UserAgents => Report::UserAgents(generate_user_agents_report(records)),
        }
    }

    pub fn kind(&self) -> ReportKind {
        match self {
            Report::Average(_) => ReportKind::Average,
            Report::UserAgents(_) => ReportKind::UserAgents,
        }
    }

    pub fn row_count(&self) -> usize {
        match self {
            Report::Average(rows) => rows.len(),
            Report::UserAgents(rows) => rows.len(),
        }
    }

    pub fn render(&self, format: OutputFormat) -> serde_json::Result<String> {
        match (self, format) {
            (Report::Average(rows), OutputFormat::Table) => Ok(render_table(rows)),
            (Report::UserAgents(rows), OutputFormat::Table) => Ok(render_table(rows)),
            (Report::Average(rows), OutputFormat::Json) => render_json(rows),
            (Report::UserAgents(rows), OutputFormat::Json) => render_json(rows),
        }
    }
}
