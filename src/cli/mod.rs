//! CLI command definitions and handlers

mod init;
mod score;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Parse and validate the day window (1-3650)
fn parse_days(s: &str) -> Result<usize, String> {
    let n: usize = s
        .parse()
        .map_err(|_| format!("'{}' is not a valid number", s))?;
    if n == 0 {
        Err("days must be at least 1".to_string())
    } else if n > 3650 {
        Err("days cannot exceed 3650".to_string())
    } else {
        Ok(n)
    }
}

/// Vitality - repository health scoring from git history
///
/// 100% LOCAL - reads an already-cloned repository. No data leaves your machine.
#[derive(Parser, Debug)]
#[command(name = "vitality")]
#[command(
    version,
    about = "Score a repository's vitality from its commit and release history",
    long_about = "Vitality computes a daily health score for a git repository by reducing \
its commit and tag history to four sub-metrics (contributor breadth, code \
activity, release cadence, longevity) and mapping each through configurable \
range tables.\n\n\
Run against any local clone:\n  \
vitality /path/to/repo --days 60",
    after_help = "\
Examples:
  vitality .                           Score the current directory
  vitality /path/to/repo --days 90     Score 90 days of history
  vitality . --format json             JSON series for scripting
  vitality . --format html -o out.html Standalone HTML chart
  vitality . --ranges my-ranges.toml   Custom scoring tables
  vitality init                        Write a default ranges.toml"
)]
pub struct Cli {
    /// Path to repository (default: current directory)
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Number of day offsets to score, offset 0 = today
    #[arg(long, short = 'd', default_value = "60", value_parser = parse_days)]
    pub days: usize,

    /// Output format: text, json, html
    #[arg(long, short = 'f', default_value = "text", value_parser = ["text", "json", "html"])]
    pub format: String,

    /// Output file path (default: stdout)
    #[arg(long, short = 'o')]
    pub output: Option<PathBuf>,

    /// Scoring-range tables file (default: ranges.toml in the repository,
    /// else the built-in tables)
    #[arg(long)]
    pub ranges: Option<PathBuf>,

    /// What to do when history predates 2005: warn (score longevity as 0
    /// and continue) or fail
    #[arg(long, default_value = "warn", value_parser = ["warn", "fail"])]
    pub on_pre_epoch: String,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, default_value = "warn", value_parser = ["error", "warn", "info", "debug", "trace"])]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Write a default ranges.toml with the built-in scoring tables
    Init,
}

/// Dispatch the parsed CLI. No subcommand scores `path`.
pub fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Some(Commands::Init) => init::run(&cli.path),
        None => score::run(&cli),
    }
}
