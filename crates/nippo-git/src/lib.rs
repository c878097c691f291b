// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! nippo-git: daily commit retrieval for nippo
//!
//! This library crate lists the commits the current user made on a given
//! day, for consumption by the nippo report generator.

#![warn(missing_docs)]

//! # Example
//!
//! ```no_run
//! use chrono::Local;
//! use nippo_git::{CommitFetcher, GitCli};
//!
//! let fetcher = CommitFetcher::new(GitCli::new(), ".");
//! let commits = fetcher
//!     .commits_for(Local::now().date_naive())
//!     .expect("fetch commits");
//!
//! for c in commits {
//!     println!("{} - {}", c.hash, c.message);
//! }
//! ```

pub mod cli;
pub mod commit;
pub mod error;
pub mod fetcher;
pub mod libgit2;
pub mod parser;
pub mod query;

pub use cli::GitCli;
pub use commit::CommitRecord;
pub use error::GitError;
pub use fetcher::CommitFetcher;
pub use libgit2::Libgit2History;
pub use parser::parse_log_output;
pub use query::{HistoryPort, HistoryQuery};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::commit::CommitRecord;
    pub use crate::error::GitError;
    pub use crate::fetcher::CommitFetcher;
    pub use crate::query::{HistoryPort, HistoryQuery};
    pub use crate::{GitCli, Libgit2History};
}
