//! Init command - write a default ranges.toml

use anyhow::{Context, Result};
use console::style;
use std::path::Path;

use super::score::ranges_file;
use crate::config::DEFAULT_RANGES_TOML;

/// Run the init command
pub fn run(path: &Path) -> Result<()> {
    let target = path
        .canonicalize()
        .with_context(|| format!("Path does not exist: {}", path.display()))?;

    if !target.is_dir() {
        anyhow::bail!("Path is not a directory: {}", target.display());
    }

    let ranges_path = ranges_file(&target);
    if ranges_path.exists() {
        println!(
            "{} {} already exists, leaving it untouched",
            style("✓").green(),
            style(ranges_path.display()).cyan()
        );
        return Ok(());
    }

    std::fs::write(&ranges_path, DEFAULT_RANGES_TOML)
        .with_context(|| "Failed to write ranges.toml")?;
    println!(
        "{} Created {}",
        style("✓").green(),
        style(ranges_path.display()).cyan()
    );
    println!("  Edit the tables, then run: vitality {}", path.display());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ScoringRanges;

    #[test]
    fn test_init_writes_loadable_ranges() {
        let dir = tempfile::tempdir().unwrap();
        run(dir.path()).unwrap();
        let path = dir.path().join("ranges.toml");
        assert!(path.exists());
        assert!(ScoringRanges::load(&path).is_ok());
    }

    #[test]
    fn test_init_does_not_overwrite() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ranges.toml");
        std::fs::write(&path, "tables = []").unwrap();
        run(dir.path()).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "tables = []");
    }

    #[test]
    fn test_init_missing_path_fails() {
        let dir = tempfile::tempdir().unwrap();
        assert!(run(&dir.path().join("nope")).is_err());
    }
}
