use clap::Parser;
use logreport_core::cli::{Cli, run};
use logreport_core::logging::init_logging;
use std::io;

fn main() {
    let cli = Cli::parse();

    init_logging(cli.log_format);

    tracing::debug!(files = cli.files.len(), report = cli.report.as_str(), "starting");

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if let Err(e) = run(&cli, &mut out) {
        eprintln!("logreport error: {e}");
        std::process::exit(1);
    }
}
