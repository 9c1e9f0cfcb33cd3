//! History bucketizer
//!
//! Converts an unordered commit/tag history into structures that answer the
//! engine's two query shapes in better than linear time per query:
//!
//! 1. cumulative distinct authors strictly before a threshold instant, and
//! 2. commit/merge/tag counts on a single calendar date (UTC).
//!
//! Commits are sorted by author time once; calendar buckets are built in one
//! pass. Cumulative author counts for all day offsets are produced by a
//! single frontier sweep from the oldest threshold to the newest, so the
//! author set only ever grows during the sweep — the per-offset counts are
//! monotone by construction, and an author who drops out of the window for
//! some offset can never reappear at a deeper one.

use chrono::{DateTime, Duration, NaiveDate, Utc};
use std::collections::{HashMap, HashSet};

use crate::models::{CommitRecord, RepoHistory, TagRecord};

/// Commit and merge counts for one calendar date.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DayActivity {
    pub commits: usize,
    pub merges: usize,
}

/// Read-only bucketed view of one repository's history.
///
/// Built once per computation; every query afterwards is immutable, so
/// per-offset scoring can fan out across threads freely.
pub struct HistoryBuckets {
    /// Commits sorted ascending by author time
    commits: Vec<CommitRecord>,
    by_date: HashMap<NaiveDate, DayActivity>,
    tags_by_date: HashMap<NaiveDate, usize>,
}

impl HistoryBuckets {
    /// Ingest a history: one sort plus one bucketing pass.
    pub fn build(history: RepoHistory) -> Self {
        let RepoHistory { mut commits, tags } = history;
        commits.sort_by_key(|c| c.timestamp);

        let mut by_date: HashMap<NaiveDate, DayActivity> = HashMap::new();
        for commit in &commits {
            let entry = by_date.entry(commit.timestamp.date_naive()).or_default();
            entry.commits += 1;
            if commit.is_merge() {
                entry.merges += 1;
            }
        }

        let mut tags_by_date: HashMap<NaiveDate, usize> = HashMap::new();
        for TagRecord { timestamp } in &tags {
            *tags_by_date.entry(timestamp.date_naive()).or_default() += 1;
        }

        Self {
            commits,
            by_date,
            tags_by_date,
        }
    }

    /// Author timestamp of the oldest commit, if any.
    pub fn oldest(&self) -> Option<DateTime<Utc>> {
        self.commits.first().map(|c| c.timestamp)
    }

    /// Commit/merge counts on a calendar date.
    pub fn activity_on(&self, date: NaiveDate) -> DayActivity {
        self.by_date.get(&date).copied().unwrap_or_default()
    }

    /// Tag count on a calendar date.
    pub fn tags_on(&self, date: NaiveDate) -> usize {
        self.tags_by_date.get(&date).copied().unwrap_or_default()
    }

    /// Distinct authors of commits strictly before `threshold`.
    ///
    /// Linear scan; the per-offset fast path is [`Self::author_counts`].
    pub fn authors_before(&self, threshold: DateTime<Utc>) -> HashSet<&str> {
        self.commits
            .iter()
            .take_while(|c| c.timestamp < threshold)
            .map(|c| c.author.as_str())
            .collect()
    }

    /// Distinct-author counts for every offset in `0..days`, where the
    /// threshold for offset `i` is `now - i` days.
    ///
    /// Offsets are swept oldest-first (days-1 down to 0) while a frontier
    /// index advances through the sorted commits, inserting each author
    /// exactly once. O(n + days) after the initial sort, against
    /// O(days x n) for per-offset rescans.
    pub fn author_counts(&self, now: DateTime<Utc>, days: usize) -> Vec<usize> {
        let mut counts = vec![0; days];
        let mut seen: HashSet<&str> = HashSet::new();
        let mut frontier = 0;
        for offset in (0..days).rev() {
            let threshold = now - Duration::days(offset as i64);
            while frontier < self.commits.len() && self.commits[frontier].timestamp < threshold {
                seen.insert(self.commits[frontier].author.as_str());
                frontier += 1;
            }
            counts[offset] = seen.len();
        }
        counts
    }
}
