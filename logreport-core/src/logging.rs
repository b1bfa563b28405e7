use clap::ValueEnum;
use std::io;
use tracing_subscriber::{EnvFilter, fmt};

/// Initialize diagnostics on stderr with environment-based filtering.
///
/// Stdout carries the report itself, so every event goes to stderr:
/// - `RUST_LOG` selects the level (defaults to "warn" if not set)
/// - `LogFormat::Json` flattens event fields into one JSON object per line
pub fn init_logging(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    match format {
        LogFormat::Pretty => fmt()
            .with_env_filter(filter)
            .with_writer(io::stderr)
            .init(),
        LogFormat::Json => fmt()
            .with_env_filter(filter)
            .with_writer(io::stderr)
            .json()
            .flatten_event(true)
            .init(),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    Pretty,
    Json,
}
