//! Temporal activity scoring engine
//!
//! The algorithmic core: ingests a repository's commit/tag history once,
//! buckets it for windowed queries, reduces each day-offset window to four
//! sub-metrics, and maps them through the scoring tables into a daily
//! vitality series.

pub mod buckets;
pub mod metrics;
pub mod score;

pub use buckets::{DayActivity, HistoryBuckets};
pub use score::{compute_series, score_repository, EpochPolicy};
