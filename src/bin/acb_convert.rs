//! acb-convert CLI entry point

use acbrip::config::{cli, ConvertCli, ConvertSettings};
use acbrip::pipeline;
use clap::Parser;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let cli = ConvertCli::parse();

    init_logging(&cli);

    let settings = ConvertSettings::from_cli(&cli);

    // Job failures are reported in the summary but do not fail the process;
    // only setup errors yield a nonzero exit.
    match pipeline::run(&settings) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn init_logging(cli: &ConvertCli) {
    let filter = cli::log_filter(cli.verbose, cli.quiet);

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_target(false)
        .init();
}
