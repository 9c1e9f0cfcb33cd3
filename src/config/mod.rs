//! Scoring-range configuration
//!
//! Loads the named range tables (`userCommunity`, `codeActivity`,
//! `releaseHistory`, `longevity`) from a `ranges.toml` file, once per
//! invocation. Each table is an ordered list of half-open `[min, max)`
//! intervals mapped to a point value.
//!
//! # Configuration Format
//!
//! ```toml
//! # ranges.toml
//!
//! [[tables]]
//! name = "userCommunity"
//! ranges = [
//!     { min = 0.0, max = 1.0, points = 0.0 },
//!     { min = 1.0, max = 3.0, points = 3.0 },
//! ]
//! ```
//!
//! A value landing in no range of a table yields 0 points; so does a lookup
//! against a table name that is not configured. Both are graceful
//! degradation, not errors — only a malformed file or a range with
//! `min > max` is a [`VitalityError::Config`].

use serde::Deserialize;
use std::path::Path;
use tracing::{debug, trace};

use crate::error::{Result, VitalityError};

/// Table name for the contributor-breadth sub-metric.
pub const USER_COMMUNITY: &str = "userCommunity";
/// Table name for the commit/merge activity sub-metric.
pub const CODE_ACTIVITY: &str = "codeActivity";
/// Table name for the release-cadence sub-metric.
pub const RELEASE_HISTORY: &str = "releaseHistory";
/// Table name for the repository-age sub-metric.
pub const LONGEVITY: &str = "longevity";

/// The four table names the engine looks up.
pub const KNOWN_TABLES: &[&str] = &[USER_COMMUNITY, CODE_ACTIVITY, RELEASE_HISTORY, LONGEVITY];

/// One half-open scoring interval: `min <= value < max` is worth `points`.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct Range {
    pub min: f64,
    pub max: f64,
    pub points: f64,
}

impl Range {
    fn contains(&self, value: f64) -> bool {
        value >= self.min && value < self.max
    }
}

/// A named, ordered set of ranges. Ranges need not be contiguous or
/// exhaustive; the first match wins.
#[derive(Debug, Clone, Deserialize)]
pub struct ScoringTable {
    pub name: String,
    pub ranges: Vec<Range>,
}

impl ScoringTable {
    /// Points for `value`: the first range containing it, else 0.
    /// Pure: identical `(table, value)` always yields identical output.
    pub fn lookup(&self, value: f64) -> f64 {
        match self.ranges.iter().find(|r| r.contains(value)) {
            Some(range) => range.points,
            None => {
                trace!(table = %self.name, value, "value outside every range, scoring 0");
                0.0
            }
        }
    }
}

/// The full set of scoring tables for one invocation. Immutable once loaded.
#[derive(Debug, Clone, Deserialize)]
pub struct ScoringRanges {
    pub tables: Vec<ScoringTable>,
}

impl ScoringRanges {
    /// Load and validate tables from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path).map_err(|e| {
            VitalityError::Config(format!("cannot read {}: {}", path.display(), e))
        })?;
        let ranges: ScoringRanges = toml::from_str(&raw).map_err(|e| {
            VitalityError::Config(format!("cannot parse {}: {}", path.display(), e))
        })?;
        ranges.validate()?;
        debug!(path = %path.display(), tables = ranges.tables.len(), "loaded scoring ranges");
        Ok(ranges)
    }

    /// The compiled-in default tables, also what `vitality init` writes.
    pub fn builtin() -> Self {
        let table = |name: &str, ranges: &[(f64, f64, f64)]| ScoringTable {
            name: name.to_string(),
            ranges: ranges
                .iter()
                .map(|&(min, max, points)| Range { min, max, points })
                .collect(),
        };
        ScoringRanges {
            tables: vec![
                table(
                    USER_COMMUNITY,
                    &[
                        (0.0, 1.0, 0.0),
                        (1.0, 3.0, 3.0),
                        (3.0, 10.0, 6.0),
                        (10.0, 10000.0, 10.0),
                    ],
                ),
                table(
                    CODE_ACTIVITY,
                    &[
                        (0.0, 1.0, 0.0),
                        (1.0, 3.0, 2.0),
                        (3.0, 10.0, 5.0),
                        (10.0, 10000.0, 10.0),
                    ],
                ),
                table(
                    RELEASE_HISTORY,
                    &[(0.0, 1.0, 0.0), (1.0, 2.0, 5.0), (2.0, 10000.0, 10.0)],
                ),
                table(
                    LONGEVITY,
                    &[
                        (0.0, 180.0, 0.0),
                        (180.0, 365.0, 2.0),
                        (365.0, 1825.0, 5.0),
                        (1825.0, 100000.0, 10.0),
                    ],
                ),
            ],
        }
    }

    /// Enforce `min <= max` on every range. `min == max` is a legal empty
    /// interval; only an inverted range is malformed.
    pub fn validate(&self) -> Result<()> {
        for table in &self.tables {
            for range in &table.ranges {
                if range.min > range.max {
                    return Err(VitalityError::Config(format!(
                        "table '{}': range min {} exceeds max {}",
                        table.name, range.min, range.max
                    )));
                }
            }
        }
        Ok(())
    }

    /// Find a table by name.
    pub fn table(&self, name: &str) -> Option<&ScoringTable> {
        self.tables.iter().find(|t| t.name == name)
    }

    /// Points for `value` in the named table; 0 when the table is absent.
    pub fn lookup(&self, name: &str, value: f64) -> f64 {
        match self.table(name) {
            Some(table) => table.lookup(value),
            None => {
                debug!(table = name, "no such scoring table, scoring 0");
                0.0
            }
        }
    }
}

/// TOML template written by `vitality init`. Kept in sync with
/// [`ScoringRanges::builtin`] (asserted by test).
pub const DEFAULT_RANGES_TOML: &str = r#"# Vitality scoring ranges
#
# Each table maps a sub-metric value onto points through ordered half-open
# intervals: min <= value < max. A value matching no interval scores 0.

[[tables]]
name = "userCommunity"
ranges = [
    { min = 0.0, max = 1.0, points = 0.0 },
    { min = 1.0, max = 3.0, points = 3.0 },
    { min = 3.0, max = 10.0, points = 6.0 },
    { min = 10.0, max = 10000.0, points = 10.0 },
]

[[tables]]
name = "codeActivity"
ranges = [
    { min = 0.0, max = 1.0, points = 0.0 },
    { min = 1.0, max = 3.0, points = 2.0 },
    { min = 3.0, max = 10.0, points = 5.0 },
    { min = 10.0, max = 10000.0, points = 10.0 },
]

[[tables]]
name = "releaseHistory"
ranges = [
    { min = 0.0, max = 1.0, points = 0.0 },
    { min = 1.0, max = 2.0, points = 5.0 },
    { min = 2.0, max = 10000.0, points = 10.0 },
]

[[tables]]
name = "longevity"
ranges = [
    { min = 0.0, max = 180.0, points = 0.0 },
    { min = 180.0, max = 365.0, points = 2.0 },
    { min = 365.0, max = 1825.0, points = 5.0 },
    { min = 1825.0, max = 100000.0, points = 10.0 },
]
"#;
