//! Commit record type

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

/// Length of the abbreviated hash shown in reports
pub const SHORT_HASH_LEN: usize = 7;

/// `strftime` pattern matching git's `%ai` placeholder
pub const GIT_DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S %z";

/// One commit retrieved for the report day
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitRecord {
    /// Abbreviated commit id (first 7 characters)
    pub hash: String,
    /// Author date as printed by git, including the UTC offset
    pub timestamp: String,
    /// Author name
    pub author: String,
    /// Subject line of the commit message
    pub message: String,
}

impl CommitRecord {
    /// Build a record from a full commit id, keeping only the short hash
    pub fn new(
        full_hash: &str,
        timestamp: impl Into<String>,
        author: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            hash: short_hash(full_hash).to_string(),
            timestamp: timestamp.into(),
            author: author.into(),
            message: message.into(),
        }
    }

    /// Parse the timestamp, keeping the recorded offset
    ///
    /// Accepts git's `%ai` format and RFC 3339.
    #[must_use]
    pub fn time(&self) -> Option<DateTime<FixedOffset>> {
        parse_timestamp(&self.timestamp)
    }
}

/// First [`SHORT_HASH_LEN`] characters of a commit id
#[must_use]
pub fn short_hash(full: &str) -> &str {
    match full.char_indices().nth(SHORT_HASH_LEN) {
        Some((idx, _)) => &full[..idx],
        None => full,
    }
}

/// Parse a git or RFC 3339 timestamp
#[must_use]
pub fn parse_timestamp(raw: &str) -> Option<DateTime<FixedOffset>> {
    let raw = raw.trim();
    DateTime::parse_from_str(raw, GIT_DATE_FORMAT)
        .or_else(|_| DateTime::parse_from_rfc3339(raw))
        .ok()
}
