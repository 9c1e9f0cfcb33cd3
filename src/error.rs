//! Error taxonomy for vitality computations
//!
//! Every fatal error names the stage that produced it (input validation,
//! git backend, scoring ranges, or history validation). Nothing here is
//! retried: all inputs are materialized in memory before the engine runs.

use thiserror::Error;

/// Errors produced while scoring a repository.
#[derive(Error, Debug)]
pub enum VitalityError {
    /// Invalid caller arguments (empty path, non-positive day count, ...).
    /// Fatal, returned immediately.
    #[error("invalid input: {0}")]
    Input(String),

    /// The repository is missing or its history cannot be traversed.
    /// Fatal for the invocation; never degraded into an empty history.
    #[error("git backend: {0}")]
    Vcs(String),

    /// The scoring-range tables are missing or malformed. Fatal, since no
    /// score is meaningful without them.
    #[error("scoring ranges: {0}")]
    Config(String),

    /// The repository history fails a domain check (e.g. its oldest commit
    /// predates the version-control era). Recoverable: the caller decides
    /// whether to continue with a zeroed longevity or abort.
    #[error("history validation: {0}")]
    Validation(String),
}

impl From<git2::Error> for VitalityError {
    fn from(err: git2::Error) -> Self {
        VitalityError::Vcs(err.message().to_string())
    }
}

pub type Result<T> = std::result::Result<T, VitalityError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_errors_name_their_stage() {
        let err = VitalityError::Config("ranges.toml: missing table".into());
        assert!(err.to_string().starts_with("scoring ranges:"));

        let err = VitalityError::Vcs("could not find repository".into());
        assert!(err.to_string().starts_with("git backend:"));
    }

    #[test]
    fn test_git2_error_maps_to_vcs() {
        let git_err = git2::Error::from_str("bad object");
        let err: VitalityError = git_err.into();
        assert!(matches!(err, VitalityError::Vcs(_)));
    }
}
