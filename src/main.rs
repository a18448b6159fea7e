//! ipnorm CLI entry point.

use std::io;

use anyhow::{bail, Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use ipnorm::cli::{read_inputs, run, Args};

fn main() -> Result<()> {
    // Parse command line arguments
    let args = Args::parse();

    // Set up logging
    let filter = match args.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()))
        .with_writer(io::stderr)
        .init();

    let inputs = if args.reads_stdin() {
        read_inputs(io::stdin().lock()).context("Failed to read addresses from stdin")?
    } else {
        args.addresses.clone()
    };

    let mut stdout = io::stdout().lock();
    let failures = run(&args, &inputs, &mut stdout).context("Failed to write results")?;

    if failures > 0 {
        bail!("{failures} of {} addresses were invalid", inputs.len());
    }
    Ok(())
}
