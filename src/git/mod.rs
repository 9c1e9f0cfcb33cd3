//! Git history extraction module
//!
//! Thin collaborator around libgit2: opens a repository and extracts the
//! commit and tag records the scoring engine consumes. No scoring logic
//! lives here.

pub mod history;

pub use history::GitHistory;
