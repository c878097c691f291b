// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! History port backed by the `git` executable

use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use tracing::{debug, warn};

use crate::commit::CommitRecord;
use crate::error::GitError;
use crate::parser::parse_log_output;
use crate::query::{HistoryPort, HistoryQuery};

/// Runs `git log` in a child process and parses its output
#[derive(Debug, Clone)]
pub struct GitCli {
    program: PathBuf,
}

impl Default for GitCli {
    fn default() -> Self {
        Self::new()
    }
}

impl GitCli {
    /// Use `git` from `PATH`
    #[must_use]
    pub fn new() -> Self {
        Self {
            program: PathBuf::from("git"),
        }
    }

    /// Use a specific git executable
    #[must_use]
    pub fn with_program(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// The executable this port runs
    #[must_use]
    pub fn program(&self) -> &Path {
        &self.program
    }

    /// Arguments for the log query, after `-C <repo>`
    ///
    /// `--author` matches a substring of `Name <email>`, so the records are
    /// filtered again by exact name after parsing.
    #[must_use]
    pub fn log_args(query: &HistoryQuery) -> Vec<String> {
        let day = query.day();
        let mut args = vec![
            "-c".to_string(),
            "log.showSignature=false".to_string(),
            "log".to_string(),
            format!("--since={day} 00:00:00"),
            format!("--until={day} 23:59:59"),
        ];
        if let Some(author) = &query.author {
            args.push(format!("--author={author}"));
            args.push("--fixed-strings".to_string());
        }
        args.push(format!("--pretty=format:{}", HistoryQuery::pretty_format()));
        args
    }

    fn run<I, S>(&self, repo: &Path, args: I) -> Result<Output, GitError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        Command::new(&self.program)
            .arg("-C")
            .arg(repo)
            .args(args)
            .output()
            .map_err(|e| {
                GitError::retrieval(format!("failed to run {}: {e}", self.program.display()))
            })
    }

    /// Fail with `NotARepository` unless `repo` is inside a working tree
    fn ensure_work_tree(&self, repo: &Path) -> Result<(), GitError> {
        let output = self.run(repo, ["rev-parse", "--is-inside-work-tree"])?;
        let inside = output.status.success()
            && String::from_utf8_lossy(&output.stdout).trim() == "true";
        if inside {
            Ok(())
        } else {
            debug!(
                path = %repo.display(),
                stderr = %String::from_utf8_lossy(&output.stderr).trim(),
                "work tree probe failed"
            );
            Err(GitError::NotARepository {
                path: repo.display().to_string(),
            })
        }
    }

    /// Whether HEAD resolves to a commit (false on an unborn branch)
    fn has_head(&self, repo: &Path) -> Result<bool, GitError> {
        let output = self.run(repo, ["rev-parse", "--verify", "--quiet", "HEAD"])?;
        Ok(output.status.success())
    }
}

impl HistoryPort for GitCli {
    fn user_name(&self, repo: &Path) -> Result<String, GitError> {
        self.ensure_work_tree(repo)?;
        let output = self.run(repo, ["config", "user.name"])?;
        let name = String::from_utf8_lossy(&output.stdout).trim().to_string();
        if !output.status.success() || name.is_empty() {
            return Err(GitError::retrieval("user.name is not configured"));
        }
        Ok(name)
    }

    fn query(&self, repo: &Path, query: &HistoryQuery) -> Result<Vec<CommitRecord>, GitError> {
        let args = Self::log_args(query);
        debug!(program = %self.program.display(), ?args, "running git log");
        let output = self.run(repo, &args)?;

        // Only a failed log needs the probes to tell the cases apart
        if !output.status.success() {
            self.ensure_work_tree(repo)?;
            if !self.has_head(repo)? {
                debug!(path = %repo.display(), "repository has no commits yet");
                return Ok(Vec::new());
            }

            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            warn!(status = ?output.status.code(), %stderr, "git log failed");
            return Err(GitError::retrieval(if stderr.is_empty() {
                format!("git log exited with {}", output.status)
            } else {
                stderr
            }));
        }

        let mut records = parse_log_output(&String::from_utf8_lossy(&output.stdout))?;
        records.retain(|record| query.accepts_author(&record.author));
        Ok(records)
    }
}
