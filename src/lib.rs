//! Vitality - repository health scoring from commit and release activity
//!
//! Computes a daily "vitality" time series for a git repository: each day
//! offset gets a score summing four sub-metrics (contributor breadth, code
//! activity, release cadence, longevity), each mapped through a configurable
//! piecewise range table.
//!
//! # Example
//!
//! ```no_run
//! use vitality::config::ScoringRanges;
//! use vitality::engine::{score_repository, EpochPolicy};
//! use std::path::Path;
//!
//! let ranges = ScoringRanges::builtin();
//! let report = score_repository(
//!     Path::new("/path/to/repo"),
//!     60,
//!     &ranges,
//!     EpochPolicy::WarnAndContinue,
//! ).unwrap();
//! println!("current vitality: {:.1}", report.current);
//! ```

pub mod cli;
pub mod config;
pub mod engine;
pub mod error;
pub mod git;
pub mod models;
pub mod reporters;

pub use error::{Result, VitalityError};
pub use models::{CommitRecord, RepoHistory, TagRecord, VitalityReport};
