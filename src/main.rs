//! IfaceDiff - README interface drift checker
//!
//! Compares the interface declaration in a Go source file against the
//! copy hand-written into a README and reports every method that
//! drifted.

use anyhow::Result;
use ifacediff::cli::{print_discrepancies_json, print_discrepancies_text, Cli, OutputFormat};
use std::process::ExitCode;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn main() -> ExitCode {
    // Parse CLI arguments
    let cli = Cli::parse_args();

    // Setup logging; diagnostics go to stderr so the stdout report
    // stays machine-readable
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    match run(&cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(err) => {
            eprintln!("Error: {}", err);
            ExitCode::FAILURE
        }
    }
}

/// Execute the check and print the report; returns whether the
/// documentation is clean
fn run(cli: &Cli) -> Result<bool> {
    let records = ifacediff::cli::check(&cli.docs, &cli.source, &cli.interface)?;

    match cli.format {
        OutputFormat::Json => print_discrepancies_json(&records)?,
        OutputFormat::Text => print_discrepancies_text(&records),
    }

    Ok(records.is_empty())
}
