// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Error types for nippo-git

use thiserror::Error;

/// Errors that can occur while retrieving commit history
///
/// The display strings are shown to the user verbatim, so they are written
/// in the same language as the report.
#[derive(Debug, Error)]
pub enum GitError {
    /// The path is not inside a git working tree
    #[error("現在のディレクトリはGitリポジトリではありません: {path}")]
    NotARepository {
        /// The path that was checked
        path: String,
    },

    /// Any other failure while querying history
    #[error("Gitコミット履歴の取得に失敗しました: {reason}")]
    RetrievalFailed {
        /// What went wrong
        reason: String,
    },
}

impl GitError {
    /// Build a [`GitError::RetrievalFailed`] from anything displayable
    pub fn retrieval(reason: impl std::fmt::Display) -> Self {
        Self::RetrievalFailed {
            reason: reason.to_string(),
        }
    }

    /// Whether this error means the path is not a repository
    #[must_use]
    pub fn is_not_a_repository(&self) -> bool {
        matches!(self, Self::NotARepository { .. })
    }
}

impl From<git2::Error> for GitError {
    fn from(err: git2::Error) -> Self {
        Self::retrieval(err.message())
    }
}
