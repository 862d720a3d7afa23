//! marbles CLI - play red/blue marbles against the computer.

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use marbles::cli::{self, Args};

fn main() -> Result<()> {
    let args = Args::parse();

    let default_level = if args.verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    cli::run(&args)?;
    Ok(())
}
