//! acb-rename CLI entry point

use acbrip::config::{cli, RenameCli, RenameSettings};
use acbrip::rename;
use clap::Parser;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let cli = RenameCli::parse();

    init_logging(&cli);

    let settings = RenameSettings::from_cli(&cli);

    // Per-file skips and failures are counted, not fatal; only a missing or
    // unlistable target directory fails the run.
    match rename::run(&settings) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn init_logging(cli: &RenameCli) {
    let filter = cli::log_filter(cli.verbose, cli.quiet);

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_target(false)
        .init();
}
