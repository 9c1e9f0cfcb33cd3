//! Scoring orchestrator
//!
//! Drives one vitality computation end to end:
//!
//! 1. Validate inputs
//! 2. Build the history buckets (one pass)
//! 3. Compute and validate the repository age (once, not per offset)
//! 4. Capture the reference instant (once, threaded through every offset)
//! 5. Score every day offset and assemble the dense series
//!
//! The cumulative author counts are sequential by nature and computed
//! upfront; the remaining per-offset work only reads immutable buckets and
//! tables, so it fans out over rayon with no synchronization.

use chrono::{DateTime, Duration, Utc};
use rayon::prelude::*;
use std::path::Path;
use tracing::{debug, warn};

use crate::config::{
    ScoringRanges, CODE_ACTIVITY, KNOWN_TABLES, LONGEVITY, RELEASE_HISTORY, USER_COMMUNITY,
};
use crate::engine::buckets::HistoryBuckets;
use crate::engine::metrics;
use crate::error::{Result, VitalityError};
use crate::git::GitHistory;
use crate::models::{RepoHistory, VitalityReport};

/// What to do when the oldest commit predates the domain epoch.
///
/// The engine hardcodes no recovery policy; the caller picks one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EpochPolicy {
    /// Report a warning and keep scoring with a zeroed longevity input.
    #[default]
    WarnAndContinue,
    /// Abort the whole computation with the validation error.
    Fail,
}

/// Score a repository on disk: the full invocation surface.
///
/// Opens the git backend, extracts history once, captures the reference
/// instant, and computes the series. Fatal collaborator failures surface as
/// their own error kinds; nothing is retried.
pub fn score_repository(
    path: &Path,
    days: usize,
    ranges: &ScoringRanges,
    policy: EpochPolicy,
) -> Result<VitalityReport> {
    if path.as_os_str().is_empty() {
        return Err(VitalityError::Input(
            "repository path must not be empty".into(),
        ));
    }
    let history = GitHistory::open(path)?.extract()?;

    // Reference instant: captured exactly once so every offset in this run
    // sees the same "now".
    let now = Utc::now();

    let mut report = compute_series(history, ranges, days, policy, now)?;
    report.repository = path.display().to_string();
    Ok(report)
}

/// Compute the vitality series for an already-extracted history.
///
/// `now` is the reference instant; passing it explicitly keeps the engine
/// deterministic for identical inputs.
pub fn compute_series(
    history: RepoHistory,
    ranges: &ScoringRanges,
    days: usize,
    policy: EpochPolicy,
    now: DateTime<Utc>,
) -> Result<VitalityReport> {
    if days == 0 {
        return Err(VitalityError::Input("days must be positive".into()));
    }

    let buckets = HistoryBuckets::build(history);
    let oldest = buckets
        .oldest()
        .ok_or_else(|| VitalityError::Input("history contains no commits".into()))?;

    // Absent tables degrade to 0 points per lookup; say so once per run so
    // a misspelled name is visible without being a ConfigError.
    for &name in KNOWN_TABLES {
        if ranges.table(name).is_none() {
            warn!(table = name, "scoring table not configured; its sub-metric scores 0");
        }
    }

    let mut warnings = Vec::new();
    let age_days = metrics::longevity_days(oldest, now);
    let longevity_input = match metrics::validate_age(oldest, now) {
        Ok(age) => age as f64,
        Err(err) => match policy {
            EpochPolicy::Fail => return Err(err),
            EpochPolicy::WarnAndContinue => {
                warn!("{err}, scoring longevity as 0");
                warnings.push(err.to_string());
                0.0
            }
        },
    };
    // Constant contribution to every day's score.
    let longevity_points = ranges.lookup(LONGEVITY, longevity_input);

    // Sequential prefix pass, then an embarrassingly parallel map: each
    // offset reads only the immutable buckets and tables.
    let author_counts = buckets.author_counts(now, days);
    let series: Vec<f64> = (0..days)
        .into_par_iter()
        .map(|offset| {
            let threshold = now - Duration::days(offset as i64);
            let date = threshold.date_naive();
            let day = buckets.activity_on(date);
            ranges.lookup(USER_COMMUNITY, author_counts[offset] as f64)
                + ranges.lookup(CODE_ACTIVITY, metrics::code_activity(day))
                + ranges.lookup(RELEASE_HISTORY, metrics::release_cadence(buckets.tags_on(date)))
                + longevity_points
        })
        .collect();

    debug!(days, age_days, current = series[0], "computed vitality series");

    Ok(VitalityReport {
        repository: String::new(),
        days,
        current: series[0],
        series,
        age_days,
        generated_at: now,
        warnings,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Range, ScoringTable};
    use crate::models::{CommitRecord, TagRecord};
    use chrono::TimeZone;

    fn commit(author: &str, timestamp: DateTime<Utc>, parent_count: usize) -> CommitRecord {
        CommitRecord {
            author: author.to_string(),
            timestamp,
            parent_count,
        }
    }

    fn fixed_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 8, 25, 12, 0, 0).unwrap()
    }

    fn table(name: &str, ranges: &[(f64, f64, f64)]) -> ScoringTable {
        ScoringTable {
            name: name.to_string(),
            ranges: ranges
                .iter()
                .map(|&(min, max, points)| Range { min, max, points })
                .collect(),
        }
    }

    fn simple_history(now: DateTime<Utc>) -> RepoHistory {
        RepoHistory {
            commits: vec![
                commit("a@x", now - Duration::days(100), 0),
                commit("b@x", now - Duration::days(2), 1),
            ],
            tags: vec![],
        }
    }

    #[test]
    fn test_series_is_dense_over_requested_days() {
        let now = fixed_now();
        for days in [1, 7, 60] {
            let report = compute_series(
                simple_history(now),
                &ScoringRanges::builtin(),
                days,
                EpochPolicy::WarnAndContinue,
                now,
            )
            .unwrap();
            assert_eq!(report.series.len(), days);
            assert_eq!(report.days, days);
            let offsets: Vec<usize> = report.entries().map(|(o, _)| o).collect();
            assert_eq!(offsets, (0..days).collect::<Vec<_>>());
            assert_eq!(report.current, report.series[0]);
        }
    }

    #[test]
    fn test_zero_days_is_input_error() {
        let now = fixed_now();
        let err = compute_series(
            simple_history(now),
            &ScoringRanges::builtin(),
            0,
            EpochPolicy::WarnAndContinue,
            now,
        )
        .unwrap_err();
        assert!(matches!(err, VitalityError::Input(_)));
    }

    #[test]
    fn test_empty_history_is_input_error() {
        let err = compute_series(
            RepoHistory::default(),
            &ScoringRanges::builtin(),
            10,
            EpochPolicy::WarnAndContinue,
            fixed_now(),
        )
        .unwrap_err();
        assert!(matches!(err, VitalityError::Input(_)));
    }

    #[test]
    fn test_determinism_for_identical_inputs() {
        let now = fixed_now();
        let ranges = ScoringRanges::builtin();
        let a = compute_series(simple_history(now), &ranges, 30, EpochPolicy::Fail, now).unwrap();
        let b = compute_series(simple_history(now), &ranges, 30, EpochPolicy::Fail, now).unwrap();
        assert_eq!(a.series, b.series);
        assert_eq!(a.current, b.current);
        assert_eq!(a.age_days, b.age_days);
    }

    #[test]
    fn test_pre_epoch_policy_fail_aborts() {
        let now = fixed_now();
        let history = RepoHistory {
            commits: vec![commit("old@x", Utc.with_ymd_and_hms(2003, 5, 1, 0, 0, 0).unwrap(), 0)],
            tags: vec![],
        };
        let err = compute_series(
            history,
            &ScoringRanges::builtin(),
            5,
            EpochPolicy::Fail,
            now,
        )
        .unwrap_err();
        assert!(matches!(err, VitalityError::Validation(_)));
    }

    #[test]
    fn test_pre_epoch_policy_warn_zeroes_longevity() {
        let now = fixed_now();
        let history = RepoHistory {
            commits: vec![commit("old@x", Utc.with_ymd_and_hms(2003, 5, 1, 0, 0, 0).unwrap(), 0)],
            tags: vec![],
        };
        // Longevity table that scores any real age but nothing at 0.
        let ranges = ScoringRanges {
            tables: vec![table(LONGEVITY, &[(1.0, 100000.0, 15.0)])],
        };
        let report =
            compute_series(history, &ranges, 2, EpochPolicy::WarnAndContinue, now).unwrap();
        assert_eq!(report.warnings.len(), 1);
        assert!(report.warnings[0].contains("predates"));
        // Longevity input forced to 0, so no points anywhere.
        assert_eq!(report.series, vec![0.0, 0.0]);
        // The raw age is still reported.
        assert!(report.age_days > 8000);
    }

    // End-to-end scenario: two authors and a tag 10 days back, repo age 400
    // days. Expected breakdown at offset 10: 2 authors -> 10, activity 2 ->
    // 5, one release -> 8, longevity 400 -> 15. Total 38.
    #[test]
    fn test_end_to_end_scenario_offset_ten() {
        let now = fixed_now();
        let on_day = now - Duration::days(10) - Duration::hours(1);
        let history = RepoHistory {
            commits: vec![
                commit("alice@example.com", now - Duration::days(400), 0),
                commit("alice@example.com", on_day, 1),
                commit("bob@example.com", on_day + Duration::minutes(5), 1),
            ],
            tags: vec![TagRecord { timestamp: on_day }],
        };
        let ranges = ScoringRanges {
            tables: vec![
                table(USER_COMMUNITY, &[(0.0, 1.0, 0.0), (1.0, 3.0, 10.0)]),
                table(CODE_ACTIVITY, &[(0.0, 1.0, 0.0), (1.0, 5.0, 5.0)]),
                table(RELEASE_HISTORY, &[(0.0, 1.0, 0.0), (1.0, 2.0, 8.0)]),
                table(LONGEVITY, &[(0.0, 365.0, 0.0), (365.0, 9999.0, 15.0)]),
            ],
        };
        let report = compute_series(history, &ranges, 12, EpochPolicy::Fail, now).unwrap();

        assert_eq!(report.age_days, 400);
        assert_eq!(report.series[10], 38.0);
        // Offset 0: both authors still cumulative (10), no activity or tags
        // today, longevity still 15.
        assert_eq!(report.series[0], 25.0);
    }

    #[test]
    fn test_missing_tables_degrade_to_zero_not_error() {
        let now = fixed_now();
        // Only longevity configured; everything else silently scores 0.
        let ranges = ScoringRanges {
            tables: vec![table(LONGEVITY, &[(0.0, 9999.0, 3.0)])],
        };
        let report = compute_series(
            simple_history(now),
            &ranges,
            3,
            EpochPolicy::Fail,
            now,
        )
        .unwrap();
        assert_eq!(report.series, vec![3.0, 3.0, 3.0]);
    }
}
