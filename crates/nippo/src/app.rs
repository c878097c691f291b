// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Report generation flow and terminal display states
//!
//! The shell shows [`ViewState::Loading`] while commits are fetched on a
//! blocking worker, then exactly one of [`ViewState::Error`] or
//! [`ViewState::Success`].

use std::fmt;

use console::style;
use nippo_git::{CommitFetcher, GitError};
use tracing::{debug, error};

use crate::config::Config;
use crate::report::DailyReport;

/// Shown if the failure carries no message of its own
pub const UNKNOWN_ERROR: &str = "不明なエラーが発生しました";

/// What the terminal is currently showing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewState {
    /// Commits are being fetched
    Loading,
    /// Generation failed with this message
    Error(String),
    /// The finished report
    Success(String),
}

impl ViewState {
    /// Whether this is the error state
    #[must_use]
    pub fn is_error(&self) -> bool {
        matches!(self, ViewState::Error(_))
    }
}

impl fmt::Display for ViewState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ViewState::Loading => write!(f, "📊 日報を生成中..."),
            ViewState::Error(message) => {
                write!(f, "{}", style(format!("❌ エラー: {message}")).red())
            }
            ViewState::Success(report) => write!(f, "{report}"),
        }
    }
}

/// Fetch the day's commits and build the report
///
/// # Errors
///
/// Returns `GitError` if the repository path cannot be determined or
/// commit retrieval fails.
pub fn build_report(config: &Config) -> Result<DailyReport, GitError> {
    let repo = config
        .repo_path()
        .ok_or_else(|| GitError::retrieval("current directory is not accessible"))?;
    let date = config.report_date();
    debug!(repo = %repo.display(), %date, backend = ?config.backend, "building report");

    let mut fetcher = CommitFetcher::new(config.backend.port(), repo);
    if let Some(author) = &config.author {
        fetcher = fetcher.with_author(author.clone());
    }
    let commits = fetcher.commits_for(date)?;

    Ok(DailyReport::build(&commits, date))
}

/// Render a report as text or pretty JSON
fn render(report: &DailyReport, json: bool) -> Result<String, serde_json::Error> {
    if json {
        serde_json::to_string_pretty(report)
    } else {
        Ok(report.to_string())
    }
}

/// Message for a worker that panicked or was cancelled
fn failure_message(join_error: tokio::task::JoinError) -> String {
    join_error
        .try_into_panic()
        .ok()
        .and_then(|payload| {
            payload
                .downcast_ref::<String>()
                .cloned()
                .or_else(|| payload.downcast_ref::<&str>().map(|s| (*s).to_string()))
        })
        .unwrap_or_else(|| UNKNOWN_ERROR.to_string())
}

/// Run report generation off the async runtime and map the outcome to a state
pub async fn generate(config: Config) -> ViewState {
    let json = config.json;
    let outcome = tokio::task::spawn_blocking(move || build_report(&config)).await;

    let state = match outcome {
        Ok(Ok(report)) => match render(&report, json) {
            Ok(text) => ViewState::Success(text),
            Err(e) => ViewState::Error(e.to_string()),
        },
        Ok(Err(e)) => ViewState::Error(e.to_string()),
        Err(join_error) => ViewState::Error(failure_message(join_error)),
    };

    if let ViewState::Error(message) = &state {
        error!(%message, "report generation failed");
    }
    state
}
