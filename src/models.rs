//! Core data models for vitality scoring
//!
//! Records are extracted once from the git backend and never mutated
//! afterwards; the report is produced fresh per invocation and carries no
//! persisted identity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single commit as seen by the scoring engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommitRecord {
    /// Author identity (email)
    pub author: String,
    /// Author timestamp
    pub timestamp: DateTime<Utc>,
    /// Number of parents; more than one marks a merge
    pub parent_count: usize,
}

impl CommitRecord {
    /// Whether this commit converges more than one line of history.
    pub fn is_merge(&self) -> bool {
        self.parent_count > 1
    }
}

/// A tag, collapsed to the timestamp of the commit it resolves to.
/// Lightweight and annotated tags look identical here; tags whose target
/// does not resolve to a commit are dropped before reaching the engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TagRecord {
    pub timestamp: DateTime<Utc>,
}

/// The full extracted history of one repository.
#[derive(Debug, Clone, Default)]
pub struct RepoHistory {
    pub commits: Vec<CommitRecord>,
    pub tags: Vec<TagRecord>,
}

/// Result of one vitality computation.
///
/// `series[offset]` is the score for `offset` days before the reference
/// instant; offset 0 is "today". The series is dense: its length equals the
/// requested day count, with no gaps.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VitalityReport {
    /// Repository path or label the report was computed for
    pub repository: String,
    /// Number of day offsets covered
    pub days: usize,
    /// Score at offset 0 (most recent day)
    pub current: f64,
    /// Per-offset scores, index = day offset
    pub series: Vec<f64>,
    /// Repository age in whole days since the oldest commit
    pub age_days: i64,
    /// Reference instant the whole series was computed against
    pub generated_at: DateTime<Utc>,
    /// Non-fatal findings surfaced during scoring (e.g. pre-epoch history)
    #[serde(default)]
    pub warnings: Vec<String>,
}

impl VitalityReport {
    /// Ordered `(offset, score)` pairs covering `0..days` with no gaps.
    /// This is the exact contract handed to report sinks.
    pub fn entries(&self) -> impl Iterator<Item = (usize, f64)> + '_ {
        self.series.iter().copied().enumerate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_detection() {
        let commit = CommitRecord {
            author: "a@example.com".into(),
            timestamp: Utc::now(),
            parent_count: 2,
        };
        assert!(commit.is_merge());

        let root = CommitRecord {
            parent_count: 0,
            ..commit.clone()
        };
        assert!(!root.is_merge());
    }

    #[test]
    fn test_entries_are_dense_and_ordered() {
        let report = VitalityReport {
            repository: "repo".into(),
            days: 3,
            current: 5.0,
            series: vec![5.0, 2.0, 0.0],
            age_days: 100,
            generated_at: Utc::now(),
            warnings: Vec::new(),
        };
        let entries: Vec<_> = report.entries().collect();
        assert_eq!(entries, vec![(0, 5.0), (1, 2.0), (2, 0.0)]);
    }
}
