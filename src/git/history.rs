//! Git history extraction using libgit2
//!
//! Extracts commit and tag records using the git2 crate (Rust bindings to
//! libgit2). Failures here are fatal for the invocation: an unreadable
//! repository must never be silently scored as an empty history.

use chrono::{DateTime, TimeZone, Utc};
use git2::{Repository, Sort};
use std::path::Path;
use tracing::debug;

use crate::error::{Result, VitalityError};
use crate::models::{CommitRecord, RepoHistory, TagRecord};

/// Git backend for one repository.
pub struct GitHistory {
    repo: Repository,
}

impl std::fmt::Debug for GitHistory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GitHistory").finish_non_exhaustive()
    }
}

impl GitHistory {
    /// Open a git repository.
    ///
    /// # Arguments
    /// * `path` - Path to the repository (or any subdirectory)
    pub fn open(path: &Path) -> Result<Self> {
        let repo = Repository::discover(path).map_err(|e| {
            VitalityError::Vcs(format!(
                "failed to open repository at {}: {}",
                path.display(),
                e.message()
            ))
        })?;
        debug!("opened git repository at {:?}", repo.path());
        Ok(Self { repo })
    }

    /// Check if a path is inside a git repository.
    pub fn is_git_repo(path: &Path) -> bool {
        Repository::discover(path).is_ok()
    }

    /// Extract the full history in one pass: all commits reachable from
    /// HEAD plus all tags that resolve to a commit.
    pub fn extract(&self) -> Result<RepoHistory> {
        Ok(RepoHistory {
            commits: self.list_commits()?,
            tags: self.list_tags()?,
        })
    }

    /// All commits reachable from HEAD, in any order (the engine sorts).
    ///
    /// An unborn HEAD or a broken object database is a [`VitalityError::Vcs`],
    /// never an empty vec.
    pub fn list_commits(&self) -> Result<Vec<CommitRecord>> {
        let mut revwalk = self.repo.revwalk()?;
        revwalk.set_sorting(Sort::TIME)?;
        revwalk.push_head().map_err(|e| {
            VitalityError::Vcs(format!("cannot traverse history from HEAD: {}", e.message()))
        })?;

        let mut commits = Vec::new();
        for oid_result in revwalk {
            let oid = oid_result?;
            let commit = self.repo.find_commit(oid)?;
            let author = commit.author();
            commits.push(CommitRecord {
                author: author.email().unwrap_or("unknown").to_string(),
                timestamp: git_time_to_utc(&author.when()),
                parent_count: commit.parent_count(),
            });
        }
        debug!(count = commits.len(), "extracted commits");
        Ok(commits)
    }

    /// All tags whose target resolves to a commit. Annotated and lightweight
    /// tags collapse to the same record; unresolved targets are dropped.
    pub fn list_tags(&self) -> Result<Vec<TagRecord>> {
        let mut tags = Vec::new();
        for reference in self.repo.references_glob("refs/tags/*")? {
            let reference = reference?;
            match reference.peel_to_commit() {
                Ok(commit) => tags.push(TagRecord {
                    timestamp: git_time_to_utc(&commit.author().when()),
                }),
                Err(e) => {
                    debug!(
                        tag = reference.name().unwrap_or("<non-utf8>"),
                        "dropping tag with unresolved target: {}",
                        e.message()
                    );
                }
            }
        }
        debug!(count = tags.len(), "extracted tags");
        Ok(tags)
    }
}

/// Convert a git timestamp to UTC. Out-of-range values collapse to the Unix
/// epoch rather than failing the whole extraction.
fn git_time_to_utc(time: &git2::Time) -> DateTime<Utc> {
    Utc.timestamp_opt(time.seconds(), 0)
        .single()
        .unwrap_or(DateTime::UNIX_EPOCH)
}
