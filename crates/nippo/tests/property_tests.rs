// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Property-based tests for report synthesis

use chrono::{FixedOffset, NaiveDate};
use nippo::category::{Category, tally};
use nippo::report::{DailyReport, generate_daily_report};
use nippo_git::CommitRecord;
use proptest::prelude::*;

fn day() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 1).expect("valid date")
}

/// The offset the generated timestamps are recorded in
fn jst() -> FixedOffset {
    FixedOffset::east_opt(9 * 3600).expect("valid offset")
}

/// Strategy for a commit on 2024-01-01 with a random time and subject
fn commit_strategy() -> impl Strategy<Value = CommitRecord> {
    (
        "[0-9a-f]{40}",
        0u32..24,
        0u32..60,
        prop_oneof![
            Just("feat: add thing".to_string()),
            Just("fix: bug".to_string()),
            Just("refactor: tidy".to_string()),
            Just("docs: readme".to_string()),
            Just("test: more".to_string()),
            Just("style: css".to_string()),
            Just("バグ修正と機能追加".to_string()),
            "[a-z ]{0,30}",
        ],
    )
        .prop_map(|(sha, hour, minute, message)| {
            CommitRecord::new(
                &sha,
                format!("2024-01-01 {hour:02}:{minute:02}:00 +0900"),
                "Prop Author",
                message,
            )
        })
}

proptest! {
    /// Property: one task line per commit, in order, numbered 1..N
    #[test]
    fn prop_task_lines_match_commits(commits in proptest::collection::vec(commit_strategy(), 1..20)) {
        let report = generate_daily_report(&commits, day());
        let task_lines: Vec<&str> = report
            .lines()
            .filter(|line| line.contains(". [") && line.ends_with(')'))
            .collect();

        prop_assert_eq!(task_lines.len(), commits.len());
        for (i, (line, commit)) in task_lines.iter().zip(&commits).enumerate() {
            let prefix = format!("{}. [", i + 1);
            let suffix = format!("({})", commit.hash);
            prop_assert!(line.starts_with(&prefix));
            prop_assert!(line.ends_with(&suffix));
        }
    }

    /// Property: working hours do not depend on input order
    #[test]
    fn prop_working_hours_order_independent(
        commits in proptest::collection::vec(commit_strategy(), 1..20)
    ) {
        let mut reversed = commits.clone();
        reversed.reverse();

        let forward = DailyReport::build(&commits, day()).statistics;
        let backward = DailyReport::build(&reversed, day()).statistics;
        prop_assert_eq!(
            forward.and_then(|s| s.working_hours),
            backward.and_then(|s| s.working_hours)
        );
    }

    /// Property: working hours span the min and max commit times
    #[test]
    fn prop_working_hours_span_extremes(
        commits in proptest::collection::vec(commit_strategy(), 1..20)
    ) {
        let times: Vec<String> = commits
            .iter()
            .map(|c| c.timestamp[11..16].to_string())
            .collect();
        let hours = DailyReport::build_in(&commits, day(), &jst())
            .statistics
            .and_then(|s| s.working_hours)
            .expect("all timestamps parse");

        prop_assert_eq!(Some(&hours.start), times.iter().min());
        prop_assert_eq!(Some(&hours.end), times.iter().max());
    }

    /// Property: each category count equals the number of matching commits
    #[test]
    fn prop_tally_counts_matching_commits(
        commits in proptest::collection::vec(commit_strategy(), 0..20)
    ) {
        let achievements = tally(&commits);
        for category in Category::ALL {
            let expected = commits
                .iter()
                .filter(|c| Category::classify(&c.message).contains(&category))
                .count();
            let actual = achievements
                .iter()
                .find(|a| a.category == category)
                .map_or(0, |a| a.count);
            prop_assert_eq!(actual, expected);
        }
    }

    /// Property: achievements are sorted by count, ties in declaration order
    #[test]
    fn prop_tally_ordering(commits in proptest::collection::vec(commit_strategy(), 0..20)) {
        let achievements = tally(&commits);
        let position = |c: Category| Category::ALL.iter().position(|&x| x == c);
        for pair in achievements.windows(2) {
            prop_assert!(pair[0].count >= pair[1].count);
            if pair[0].count == pair[1].count {
                prop_assert!(position(pair[0].category) < position(pair[1].category));
            }
        }
    }
}

#[test]
fn test_empty_commits_never_fail() {
    let report = generate_daily_report(&[], day());
    assert!(report.contains("本日はコミットがありませんでした"));
    assert!(!report.contains("📊"));
    assert!(!report.contains("🎯"));
}
