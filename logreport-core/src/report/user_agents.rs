use crate::records::LogRecord;
use crate::report::tally::OrderedTally;
use crate::report::types::UserAgentReportRow;

/// Request count per `http_user_agent`, most frequent first.
pub fn generate_user_agents_report(records: &[LogRecord]) -> Vec<UserAgentReportRow> {
    let mut counts: OrderedTally<u64> = OrderedTally::new();

    for record in records {
        *counts.entry(record.user_agent()) += 1;
    }

    let mut report: Vec<UserAgentReportRow> = counts
        .into_entries()
        .into_iter()
        .map(|(user_agent, count)| UserAgentReportRow { user_agent, count })
        .collect();

    report.sort_by(|a, b| b.count.cmp(&a.count));
    report
}
