//! Vitality - repository health scoring CLI
//!
//! A fast, local-first tool that scores a repository's vitality from its
//! commit and release history, for ranking software reuse candidates.

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use vitality::cli;

fn main() -> Result<()> {
    let args = cli::Cli::parse();

    // RUST_LOG wins over --log-level; logs go to stderr so stdout stays a
    // clean report stream.
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level));
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    cli::run(args)
}
