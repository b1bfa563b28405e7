use crate::cli::args::Cli;
use crate::cli::date_filter::parse_date_filter;
use crate::records::read_logs;
use crate::report::Report;
use anyhow::Result;
use std::io::Write;
use tracing::debug;

/// Reads the logs named by `cli`, builds the requested report and writes it
/// to `out`.
///
/// A malformed `--date` is not an error: the diagnostic goes to `out` and no
/// report is produced. An empty `--date` means no filter.
pub fn run<W: Write>(cli: &Cli, out: &mut W) -> Result<()> {
    let date = cli.date.as_deref().map(str::trim).filter(|d| !d.is_empty());

    let date_filter = match date.map(parse_date_filter).transpose() {
        Ok(date) => date,
        Err(err) => {
            debug!(input = %err.input, "rejected date filter");
            writeln!(out, "{err}")?;
            return Ok(());
        }
    };

    let records = read_logs(&cli.files, date_filter)?;
    let report = Report::generate(cli.report, &records);

    debug!(
        report = report.kind().as_str(),
        records = records.len(),
        rows = report.row_count(),
        "generated report"
    );

    writeln!(out, "{}", report.render(cli.format)?)?;
    Ok(())
}
