use crate::records::LogRecord;
use crate::report::constants::AVERAGE_PRECISION;
use crate::report::tally::OrderedTally;
use crate::report::types::{AverageReportRow, EndpointStat};

/// Request count and mean response time per `url`, busiest endpoint first.
///
/// Records without a numeric `response_time` still count as a request and
/// contribute `0.0` to the total.
pub fn generate_average_report(records: &[LogRecord]) -> Vec<AverageReportRow> {
    let mut stats: OrderedTally<EndpointStat> = OrderedTally::new();

    for record in records {
        stats.entry(record.url()).record(record.response_time());
    }

    let mut report: Vec<AverageReportRow> = stats
        .into_entries()
        .into_iter()
        .map(|(endpoint, stat)| AverageReportRow {
            endpoint,
            request_count: stat.count,
            average_response_time: round_to(stat.average(), AVERAGE_PRECISION),
        })
        .collect();

    // sort_by is stable: equal counts keep first-seen order
    report.sort_by(|a, b| b.request_count.cmp(&a.request_count));
    report
}

/// Rounds the stored binary value to `places` decimals.
///
/// Goes through the formatter, which rounds the exact value once. Scaling by
/// `10^places` first can turn `1.0005` (really `1.000499...`) into a tie.
pub(crate) fn round_to(value: f64, places: usize) -> f64 {
    format!("{value:.places$}").parse().unwrap_or(value)
}
