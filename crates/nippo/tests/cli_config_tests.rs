// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! CLI tests for the nippo command-line flags
//!
//! These tests verify argument parsing, defaults, and validation.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::Parser;
use nippo::config::{Backend, Config, ConfigError};
use tracing::Level;

// ============================================================================
// --date flag tests
// ============================================================================

#[test]
fn test_date_long_flag() {
    let config =
        Config::try_parse_from(["nippo", "--date", "2024-01-01"]).expect("parse should succeed");
    assert_eq!(config.date, NaiveDate::from_ymd_opt(2024, 1, 1));
    assert_eq!(
        config.report_date(),
        NaiveDate::from_ymd_opt(2024, 1, 1).expect("valid date")
    );
}

#[test]
fn test_date_short_flag() {
    let config =
        Config::try_parse_from(["nippo", "-d", "2024-02-29"]).expect("parse should succeed");
    assert_eq!(config.date, NaiveDate::from_ymd_opt(2024, 2, 29));
}

#[test]
fn test_date_rejects_invalid_value() {
    assert!(Config::try_parse_from(["nippo", "--date", "2023-02-29"]).is_err());
    assert!(Config::try_parse_from(["nippo", "--date", "yesterday"]).is_err());
}

// ============================================================================
// --repo / --author flag tests
// ============================================================================

#[test]
fn test_repo_flag() {
    let config =
        Config::try_parse_from(["nippo", "--repo", "/some/project"]).expect("parse should succeed");
    assert_eq!(config.repo, Some(PathBuf::from("/some/project")));
    assert_eq!(config.repo_path(), Some(PathBuf::from("/some/project")));
}

#[test]
fn test_author_flag() {
    let config = Config::try_parse_from(["nippo", "-a", "Jane Doe"]).expect("parse should succeed");
    assert_eq!(config.author.as_deref(), Some("Jane Doe"));
}

#[test]
fn test_validate_repo_is_file() {
    let file = tempfile::NamedTempFile::new().expect("temp file");
    let config = Config {
        repo: Some(file.path().to_path_buf()),
        ..Default::default()
    };
    assert!(matches!(
        config.validate(),
        Err(ConfigError::RepoNotDirectory(_))
    ));
}

// ============================================================================
// --backend flag tests
// ============================================================================

#[test]
fn test_backend_default_is_git() {
    let config = Config::try_parse_from(["nippo"]).expect("parse should succeed");
    assert_eq!(config.backend, Backend::Git);
}

#[test]
fn test_backend_libgit2() {
    let config =
        Config::try_parse_from(["nippo", "--backend", "libgit2"]).expect("parse should succeed");
    assert_eq!(config.backend, Backend::Libgit2);
}

#[test]
fn test_backend_rejects_unknown() {
    assert!(Config::try_parse_from(["nippo", "--backend", "svn"]).is_err());
}

// ============================================================================
// Logging flag tests
// ============================================================================

#[test]
fn test_no_flags_means_info_level() {
    let config = Config::try_parse_from(["nippo"]).expect("parse should succeed");
    assert!(!config.verbose);
    assert!(!config.quiet);
    assert!(!config.json);
    assert_eq!(config.log_level(), Level::INFO);
}

#[test]
fn test_verbose_short_flag_v() {
    let config = Config::try_parse_from(["nippo", "-v"]).expect("parse should succeed");
    assert_eq!(config.log_level(), Level::DEBUG);
}

#[test]
fn test_quiet_long_flag() {
    let config = Config::try_parse_from(["nippo", "--quiet"]).expect("parse should succeed");
    assert_eq!(config.log_level(), Level::WARN);
}

#[test]
fn test_verbose_takes_precedence_over_quiet() {
    let config = Config::try_parse_from(["nippo", "-v", "-q"]).expect("parse should succeed");
    assert_eq!(config.log_level(), Level::DEBUG);
}

#[test]
fn test_json_flag() {
    let config = Config::try_parse_from(["nippo", "--json"]).expect("parse should succeed");
    assert!(config.json);
}

#[test]
fn test_combined_flags() {
    let config = Config::try_parse_from([
        "nippo",
        "-r",
        "/work/app",
        "-d",
        "2024-01-01",
        "-b",
        "libgit2",
        "--json",
        "-q",
    ])
    .expect("parse should succeed");
    assert_eq!(config.repo, Some(PathBuf::from("/work/app")));
    assert_eq!(config.date, NaiveDate::from_ymd_opt(2024, 1, 1));
    assert_eq!(config.backend, Backend::Libgit2);
    assert!(config.json);
    assert!(config.quiet);
}
