// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Daily commit retrieval
//!
//! [`CommitFetcher`] ties a [`HistoryPort`] to one repository path and
//! answers "what did I commit on this day".

use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use tracing::{debug, info};

use crate::commit::CommitRecord;
use crate::error::GitError;
use crate::query::{HistoryPort, HistoryQuery};

/// Fetches the current user's commits for a calendar day
pub struct CommitFetcher<P> {
    port: P,
    repo: PathBuf,
    author: Option<String>,
}

impl<P: HistoryPort> CommitFetcher<P> {
    /// Create a fetcher for the repository at (or above) `repo`
    pub fn new(port: P, repo: impl Into<PathBuf>) -> Self {
        Self {
            port,
            repo: repo.into(),
            author: None,
        }
    }

    /// Filter by this author instead of the configured `user.name`
    #[must_use]
    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    /// The repository path this fetcher queries
    #[must_use]
    pub fn repo(&self) -> &Path {
        &self.repo
    }

    /// Commits authored by the user between 00:00:00 and 23:59:59 on `date`
    ///
    /// # Errors
    ///
    /// Returns `GitError::NotARepository` if the path is not inside a
    /// working tree, or `GitError::RetrievalFailed` for any other failure.
    pub fn commits_for(&self, date: NaiveDate) -> Result<Vec<CommitRecord>, GitError> {
        let author = match &self.author {
            Some(author) => author.clone(),
            None => self.port.user_name(&self.repo)?,
        };
        debug!(%author, repo = %self.repo.display(), "resolved author filter");

        let query = HistoryQuery::for_day(date).by_author(author);
        let commits = self.port.query(&self.repo, &query)?;

        info!(count = commits.len(), day = %query.day(), "fetched commits");
        Ok(commits)
    }
}
