//! Sub-metric reducers
//!
//! Pure, total functions turning one window of bucketed history into the
//! scalar fed to a range-table lookup, plus the longevity validation against
//! the domain epoch.

use chrono::{DateTime, Utc};
use std::collections::HashSet;

use crate::engine::buckets::DayActivity;
use crate::error::{Result, VitalityError};

/// Start of the version-control era this tool targets (git, 2005).
/// 2005-01-01T00:00:00Z as a Unix timestamp.
const DOMAIN_EPOCH_SECS: i64 = 1_104_537_600;

/// The domain epoch as an instant.
pub fn domain_epoch() -> DateTime<Utc> {
    DateTime::from_timestamp(DOMAIN_EPOCH_SECS, 0).expect("constant epoch timestamp is in range")
}

/// Number of distinct author identities.
pub fn contributor_breadth(authors: &HashSet<&str>) -> f64 {
    authors.len() as f64
}

/// Commits plus merges for one day. A merge commit counts twice, once as a
/// commit and once as a merge.
pub fn code_activity(day: DayActivity) -> f64 {
    (day.commits + day.merges) as f64
}

/// Number of releases (tags) for one day.
pub fn release_cadence(tags: usize) -> f64 {
    tags as f64
}

/// Repository age in whole days, computed once per invocation.
pub fn longevity_days(oldest: DateTime<Utc>, now: DateTime<Utc>) -> i64 {
    (now - oldest).num_days()
}

/// Validate the repository age against the domain epoch.
///
/// A history whose oldest commit predates 2005 is not trustworthy for
/// longevity scoring; the caller decides whether that aborts the run or
/// zeroes the longevity contribution.
pub fn validate_age(oldest: DateTime<Utc>, now: DateTime<Utc>) -> Result<i64> {
    if oldest < domain_epoch() {
        return Err(VitalityError::Validation(format!(
            "repository predates domain epoch: oldest commit {} is before 2005-01-01",
            oldest.format("%Y-%m-%d")
        )));
    }
    Ok(longevity_days(oldest, now))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_merge_double_count() {
        // One regular commit and one merge: 2 commits + 1 merge = 3.
        let day = DayActivity {
            commits: 2,
            merges: 1,
        };
        assert_eq!(code_activity(day), 3.0);
    }

    #[test]
    fn test_contributor_breadth_counts_identities() {
        let authors: HashSet<&str> = ["a@x", "b@x"].into_iter().collect();
        assert_eq!(contributor_breadth(&authors), 2.0);
        assert_eq!(contributor_breadth(&HashSet::new()), 0.0);
    }

    #[test]
    fn test_longevity_whole_days() {
        let now = Utc.with_ymd_and_hms(2026, 8, 25, 12, 0, 0).unwrap();
        let oldest = Utc.with_ymd_and_hms(2025, 8, 25, 18, 0, 0).unwrap();
        // 364 days and 18 hours truncates to 364.
        assert_eq!(longevity_days(oldest, now), 364);
    }

    #[test]
    fn test_pre_epoch_history_fails_validation() {
        let now = Utc.with_ymd_and_hms(2026, 8, 25, 0, 0, 0).unwrap();
        let oldest = Utc.with_ymd_and_hms(2003, 5, 1, 0, 0, 0).unwrap();
        let err = validate_age(oldest, now).unwrap_err();
        assert!(matches!(err, VitalityError::Validation(_)));
        assert!(err.to_string().contains("2003-05-01"));
    }

    #[test]
    fn test_post_epoch_history_passes_validation() {
        let now = Utc.with_ymd_and_hms(2026, 8, 25, 0, 0, 0).unwrap();
        let oldest = Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap();
        let age = validate_age(oldest, now).unwrap();
        assert!(age > 2000);
    }

    #[test]
    fn test_epoch_boundary_is_inclusive() {
        let now = Utc.with_ymd_and_hms(2026, 8, 25, 0, 0, 0).unwrap();
        assert!(validate_age(domain_epoch(), now).is_ok());
    }
}
