// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Git log output parsing
//!
//! Parses the one-line-per-commit output produced by
//! `git log --pretty=format:%H|%ai|%an|%s`.

use tracing::debug;

use crate::commit::CommitRecord;
use crate::error::GitError;
use crate::query::{FIELD_SEPARATOR, LOG_FIELDS};

/// Parse raw `git log` output into commit records
///
/// Blank output yields an empty list. The subject is the remainder of the
/// line after the third separator, so a `|` inside a subject survives.
///
/// # Errors
///
/// Returns `GitError::RetrievalFailed` if a non-blank line has fewer than
/// four fields.
pub fn parse_log_output(output: &str) -> Result<Vec<CommitRecord>, GitError> {
    let output = output.trim();
    if output.is_empty() {
        return Ok(Vec::new());
    }

    let records = output
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(parse_log_line)
        .collect::<Result<Vec<_>, _>>()?;

    debug!(count = records.len(), "parsed git log output");
    Ok(records)
}

/// Parse a single `hash|date|author|subject` line
///
/// # Errors
///
/// Returns `GitError::RetrievalFailed` if the line has fewer than four fields.
pub fn parse_log_line(line: &str) -> Result<CommitRecord, GitError> {
    let line = line.trim_end_matches('\r');
    let mut fields = line.splitn(LOG_FIELDS.len(), FIELD_SEPARATOR);

    match (fields.next(), fields.next(), fields.next(), fields.next()) {
        (Some(hash), Some(date), Some(author), Some(message)) => {
            Ok(CommitRecord::new(hash, date, author, message))
        }
        _ => Err(GitError::retrieval(format!("malformed log line: {line:?}"))),
    }
}
