//! Score command - the default invocation
//!
//! Wires the collaborators together: open the git backend, load the scoring
//! ranges once, run the engine, render the report. Collaborator failures
//! abort with their own error kind; nothing falls back to an empty history.

use anyhow::{Context, Result};
use console::style;
use std::path::Path;
use tracing::debug;

use super::Cli;
use crate::config::ScoringRanges;
use crate::engine::{score_repository, EpochPolicy};
use crate::reporters;

pub fn run(cli: &Cli) -> Result<()> {
    let ranges = resolve_ranges(cli)?;
    let policy = match cli.on_pre_epoch.as_str() {
        "fail" => EpochPolicy::Fail,
        _ => EpochPolicy::WarnAndContinue,
    };

    let report = score_repository(&cli.path, cli.days, &ranges, policy)?;
    let rendered = reporters::report(&report, &cli.format)?;

    match &cli.output {
        Some(path) => {
            std::fs::write(path, rendered)
                .with_context(|| format!("failed to write report to {}", path.display()))?;
            eprintln!(
                "{} wrote {} report to {}",
                style("✓").green(),
                cli.format,
                style(path.display()).cyan()
            );
        }
        None => print!("{rendered}"),
    }

    Ok(())
}

/// Load the scoring tables exactly once per invocation.
///
/// An explicitly passed file must load or the run fails; otherwise a
/// `ranges.toml` in the repository is used when present, and the built-in
/// tables when not.
fn resolve_ranges(cli: &Cli) -> Result<ScoringRanges> {
    if let Some(path) = &cli.ranges {
        return Ok(ScoringRanges::load(path)?);
    }
    let default_path = cli.path.join("ranges.toml");
    if default_path.exists() {
        return Ok(ScoringRanges::load(&default_path)?);
    }
    debug!("no ranges.toml found, using built-in scoring tables");
    Ok(ScoringRanges::builtin())
}

/// Used by `init` to avoid clobbering a hand-edited table file.
pub(super) fn ranges_file(path: &Path) -> std::path::PathBuf {
    path.join("ranges.toml")
}
