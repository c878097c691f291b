// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Configuration for the nippo command
//!
//! This module provides the command-line and environment configuration,
//! including the repository path, report date, history backend, and
//! logging options.

use std::path::PathBuf;

use chrono::{Local, NaiveDate};
use clap::{Parser, ValueEnum};
use nippo_git::{GitCli, HistoryPort, Libgit2History};

/// Nippo - daily work report from your git commits
#[derive(Parser, Debug, Clone, Default)]
#[command(name = "nippo")]
#[command(version, about, long_about = None)]
pub struct Config {
    /// Path to the git repository (or any directory inside it)
    ///
    /// Defaults to the current working directory.
    #[arg(short, long, env = "NIPPO_REPO")]
    pub repo: Option<PathBuf>,

    /// Report date as YYYY-MM-DD
    ///
    /// Defaults to today in local time.
    #[arg(short, long, env = "NIPPO_DATE")]
    pub date: Option<NaiveDate>,

    /// Author name to report on
    ///
    /// Defaults to the repository's configured `user.name`.
    #[arg(short, long, env = "NIPPO_AUTHOR")]
    pub author: Option<String>,

    /// How commit history is read
    #[arg(short, long, value_enum, env = "NIPPO_BACKEND", default_value_t = Backend::Git)]
    pub backend: Backend,

    /// Print the report as JSON instead of text
    #[arg(long, default_value = "false")]
    pub json: bool,

    /// Enable verbose logging (debug level)
    ///
    /// Logs are written to stderr so the report on stdout stays clean.
    #[arg(short, long, default_value = "false")]
    pub verbose: bool,

    /// Quiet mode - suppress info-level logs
    ///
    /// Only errors and warnings will be logged.
    #[arg(short, long, default_value = "false")]
    pub quiet: bool,
}

/// Source of commit history
#[derive(ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Backend {
    /// Run the `git` executable
    #[default]
    Git,
    /// Read the repository in-process with libgit2
    Libgit2,
}

impl Backend {
    /// The history port for this backend
    #[must_use]
    pub fn port(self) -> Box<dyn HistoryPort + Send> {
        match self {
            Backend::Git => Box::new(GitCli::new()),
            Backend::Libgit2 => Box::new(Libgit2History::new()),
        }
    }
}

impl Config {
    /// Get the repository path, using current directory as default
    ///
    /// Returns `None` if no path is specified and the current directory
    /// cannot be determined.
    #[must_use]
    pub fn repo_path(&self) -> Option<PathBuf> {
        self.repo.clone().or_else(|| std::env::current_dir().ok())
    }

    /// Get the report date, using today (local time) as default
    #[must_use]
    pub fn report_date(&self) -> NaiveDate {
        self.date.unwrap_or_else(|| Local::now().date_naive())
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The repository path is specified but doesn't exist
    /// - The repository path is not a directory
    /// - The author name is specified but blank
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(ref repo) = self.repo {
            if !repo.exists() {
                return Err(ConfigError::RepoNotFound(repo.clone()));
            }
            if !repo.is_dir() {
                return Err(ConfigError::RepoNotDirectory(repo.clone()));
            }
        }

        if let Some(ref author) = self.author {
            if author.trim().is_empty() {
                return Err(ConfigError::EmptyAuthor);
            }
        }

        Ok(())
    }

    /// Get the log level based on verbose/quiet flags
    #[must_use]
    pub fn log_level(&self) -> tracing::Level {
        if self.verbose {
            tracing::Level::DEBUG
        } else if self.quiet {
            tracing::Level::WARN
        } else {
            tracing::Level::INFO
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Repository path not found
    #[error("Repository path not found: {0}")]
    RepoNotFound(PathBuf),

    /// Repository path is not a directory
    #[error("Repository path is not a directory: {0}")]
    RepoNotDirectory(PathBuf),

    /// Author override is blank
    #[error("Author name must not be empty")]
    EmptyAuthor,
}
