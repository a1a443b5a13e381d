//! conda-lockfile CLI - Inspect and rewrite conda-lock lockfiles
//!
//! Entry point for the conda-lockfile command-line application.

use anyhow::Result;
use clap::Parser;

use conda_lockfile::cli::output::{display_error, OutputConfig};
use conda_lockfile::cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing subscriber
    let output_config = OutputConfig::new(cli.quiet, cli.json, cli.verbose);
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(output_config.log_level().into()),
        )
        .init();

    // Run the command and handle errors
    match cli.run() {
        Ok(()) => Ok(()),
        Err(e) => {
            display_error(&e);
            std::process::exit(1);
        }
    }
}
