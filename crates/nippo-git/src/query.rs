// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! History query parameters and the port that answers them
//!
//! A [`HistoryPort`] is anything that can list commits for a repository
//! path. The crate ships two: [`crate::GitCli`], which runs the `git`
//! executable, and [`crate::Libgit2History`], which reads the repository
//! through `git2`.

use std::path::Path;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

use crate::commit::CommitRecord;
use crate::error::GitError;

/// Fields requested from git, in order, separated by [`FIELD_SEPARATOR`]
pub const LOG_FIELDS: [&str; 4] = ["%H", "%ai", "%an", "%s"];

/// Separator between fields of one log line
pub const FIELD_SEPARATOR: char = '|';

/// Structured parameters for one history query
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryQuery {
    /// Start of the window (local time, inclusive)
    pub since: NaiveDateTime,
    /// End of the window (local time, inclusive)
    pub until: NaiveDateTime,
    /// Only keep commits whose author name equals this
    pub author: Option<String>,
}

impl HistoryQuery {
    /// Query covering one calendar day, 00:00:00 to 23:59:59
    #[must_use]
    pub fn for_day(date: NaiveDate) -> Self {
        let end_of_day = NaiveTime::from_hms_opt(23, 59, 59).unwrap_or(NaiveTime::MIN);
        Self {
            since: date.and_time(NaiveTime::MIN),
            until: date.and_time(end_of_day),
            author: None,
        }
    }

    /// Restrict the query to one author
    #[must_use]
    pub fn by_author(mut self, name: impl Into<String>) -> Self {
        self.author = Some(name.into());
        self
    }

    /// The day of the window start as `YYYY-MM-DD`
    #[must_use]
    pub fn day(&self) -> String {
        self.since.format("%Y-%m-%d").to_string()
    }

    /// Whether a local time falls inside the window
    #[must_use]
    pub fn contains(&self, local: &NaiveDateTime) -> bool {
        *local >= self.since && *local <= self.until
    }

    /// Whether an author name passes the filter (exact, case-sensitive)
    #[must_use]
    pub fn accepts_author(&self, name: &str) -> bool {
        self.author.as_deref().is_none_or(|wanted| wanted == name)
    }

    /// Git `--pretty=format:` string for [`LOG_FIELDS`]
    #[must_use]
    pub fn pretty_format() -> String {
        LOG_FIELDS.join(&FIELD_SEPARATOR.to_string())
    }
}

/// Source of commit history for a repository
pub trait HistoryPort {
    /// The identity configured as `user.name` for the repository
    ///
    /// # Errors
    ///
    /// Returns `GitError::NotARepository` if `repo` is not inside a working
    /// tree, or `GitError::RetrievalFailed` if no name is configured.
    fn user_name(&self, repo: &Path) -> Result<String, GitError>;

    /// Commits matching `query`, in the order history returns them
    ///
    /// # Errors
    ///
    /// Returns `GitError::NotARepository` if `repo` is not inside a working
    /// tree, or `GitError::RetrievalFailed` for any other failure.
    fn query(&self, repo: &Path, query: &HistoryQuery) -> Result<Vec<CommitRecord>, GitError>;
}

impl<P: HistoryPort + ?Sized> HistoryPort for &P {
    fn user_name(&self, repo: &Path) -> Result<String, GitError> {
        (**self).user_name(repo)
    }

    fn query(&self, repo: &Path, query: &HistoryQuery) -> Result<Vec<CommitRecord>, GitError> {
        (**self).query(repo, query)
    }
}

impl<P: HistoryPort + ?Sized> HistoryPort for Box<P> {
    fn user_name(&self, repo: &Path) -> Result<String, GitError> {
        (**self).user_name(repo)
    }

    fn query(&self, repo: &Path, query: &HistoryQuery) -> Result<Vec<CommitRecord>, GitError> {
        (**self).query(repo, query)
    }
}
