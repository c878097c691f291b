// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! History port backed by `git2`
//!
//! Reads the repository in-process instead of spawning `git`. Commits are
//! filtered the way `git log --since/--until` does it: by committer time,
//! converted to local time. The reported timestamp is the author time.

use std::path::Path;

use chrono::{DateTime, FixedOffset, Local};
use git2::{ErrorCode, Repository, Sort};
use tracing::debug;

use crate::commit::{CommitRecord, GIT_DATE_FORMAT};
use crate::error::GitError;
use crate::query::{HistoryPort, HistoryQuery};

/// Reads commit history with libgit2
#[derive(Debug, Clone, Copy, Default)]
pub struct Libgit2History;

impl Libgit2History {
    /// Create the port
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Discover the repository containing `path`
    fn open(path: &Path) -> Result<Repository, GitError> {
        let repo = Repository::discover(path).map_err(|_| GitError::NotARepository {
            path: path.display().to_string(),
        })?;
        if repo.is_bare() {
            return Err(GitError::NotARepository {
                path: path.display().to_string(),
            });
        }
        Ok(repo)
    }
}

/// Convert a git2 time into a chrono time in its recorded offset
fn to_datetime(time: git2::Time) -> Result<DateTime<FixedOffset>, GitError> {
    let offset = FixedOffset::east_opt(time.offset_minutes() * 60)
        .ok_or_else(|| GitError::retrieval(format!("invalid offset: {}", time.offset_minutes())))?;
    DateTime::from_timestamp(time.seconds(), 0)
        .map(|utc| utc.with_timezone(&offset))
        .ok_or_else(|| GitError::retrieval(format!("invalid timestamp: {}", time.seconds())))
}

impl HistoryPort for Libgit2History {
    fn user_name(&self, repo: &Path) -> Result<String, GitError> {
        let repo = Self::open(repo)?;
        let name = repo
            .config()?
            .get_string("user.name")
            .map_err(|_| GitError::retrieval("user.name is not configured"))?;
        if name.trim().is_empty() {
            return Err(GitError::retrieval("user.name is not configured"));
        }
        Ok(name)
    }

    fn query(&self, path: &Path, query: &HistoryQuery) -> Result<Vec<CommitRecord>, GitError> {
        let repo = Self::open(path)?;

        let mut revwalk = repo.revwalk()?;
        revwalk.set_sorting(Sort::TIME)?;
        match revwalk.push_head() {
            Ok(()) => {}
            Err(e) if matches!(e.code(), ErrorCode::UnbornBranch | ErrorCode::NotFound) => {
                debug!(path = %path.display(), "repository has no commits yet");
                return Ok(Vec::new());
            }
            Err(e) => return Err(e.into()),
        }

        let mut records = Vec::new();
        for oid in revwalk {
            let commit = repo.find_commit(oid?)?;

            let committed = to_datetime(commit.time())?
                .with_timezone(&Local)
                .naive_local();
            // Newest first, so nothing older can match
            if committed < query.since {
                break;
            }
            if !query.contains(&committed) {
                continue;
            }

            let author = commit.author();
            let name = author.name().unwrap_or("");
            if !query.accepts_author(name) {
                continue;
            }

            let authored = to_datetime(author.when())?;
            records.push(CommitRecord::new(
                &commit.id().to_string(),
                authored.format(GIT_DATE_FORMAT).to_string(),
                name,
                commit.summary().unwrap_or(""),
            ));
        }

        debug!(count = records.len(), day = %query.day(), "walked commits with libgit2");
        Ok(records)
    }
}
