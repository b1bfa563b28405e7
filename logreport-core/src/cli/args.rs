use crate::logging::LogFormat;
use crate::report::{OutputFormat, ReportKind};
use clap::Parser;
use std::fs::File;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "logreport",
    version,
    about = "Summarize JSON Lines access logs into report tables"
)]
pub struct Cli {
    /// Log files to read, in order
    #[arg(long = "file", required = true, num_args = 1.., value_parser = readable_file)]
    pub files: Vec<PathBuf>,

    /// Report to generate
    #[arg(long, value_enum)]
    pub report: ReportKind,

    /// Only keep records logged on this date (YYYY-MM-DD)
    #[arg(long)]
    pub date: Option<String>,

    /// Output format for the report
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,

    /// Format of diagnostics written to stderr
    #[arg(long, value_enum, default_value_t = LogFormat::Pretty)]
    pub log_format: LogFormat,
}

/// Rejects paths that are not regular files or cannot be opened, so the
/// reader never starts on a bad argument list.
fn readable_file(value: &str) -> Result<PathBuf, String> {
    let path = PathBuf::from(value);

    if !path.is_file() {
        return Err(format!("log file '{value}' does not exist or is not a file"));
    }

    File::open(&path).map_err(|e| format!("cannot open log file '{value}': {e}"))?;

    Ok(path)
}
