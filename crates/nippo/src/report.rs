//! Daily report synthesis
//!
//! [`DailyReport::build`] turns the day's commits into a structured report
//! and its `Display` impl renders the text shown to the user. Building never
//! fails: an empty commit list produces the "no commits" report.
//!
//! Times are shown in one zone (the local one unless [`DailyReport::build_in`]
//! is given another), the same zone the day's commits were selected in.

use std::fmt;

use chrono::{DateTime, FixedOffset, Local, NaiveDate, TimeZone};
use nippo_git::CommitRecord;
use serde::Serialize;

use crate::category::{Achievement, tally};
use crate::locale::{hour_minute, long_date};

/// Shown in place of a time that could not be parsed
pub const UNKNOWN_TIME: &str = "--:--";

/// One completed task (commit) in the report
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaskLine {
    /// 1-based position in the list
    pub index: usize,
    /// `HH:MM`, if the timestamp parsed
    pub time: Option<String>,
    /// Commit subject
    pub message: String,
    /// Short hash
    pub hash: String,
}

/// Earliest and latest commit time of the day
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WorkingHours {
    /// `HH:MM` of the earliest commit
    pub start: String,
    /// `HH:MM` of the latest commit
    pub end: String,
}

impl WorkingHours {
    /// Span of the given timestamps, compared as absolute instants and
    /// shown in `tz`
    #[must_use]
    pub fn from_times<I, Tz>(times: I, tz: &Tz) -> Option<Self>
    where
        I: IntoIterator<Item = DateTime<FixedOffset>>,
        Tz: TimeZone,
        Tz::Offset: fmt::Display,
    {
        let mut times = times.into_iter();
        let first = times.next()?;
        let (earliest, latest) =
            times.fold((first, first), |(lo, hi), t| (lo.min(t), hi.max(t)));
        Some(Self {
            start: hour_minute(&earliest, tz),
            end: hour_minute(&latest, tz),
        })
    }
}

impl fmt::Display for WorkingHours {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.start, self.end)
    }
}

/// Summary numbers for a day with commits
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Statistics {
    /// Number of commits
    pub total_commits: usize,
    /// `None` when no timestamp parsed
    pub working_hours: Option<WorkingHours>,
}

/// The report for one day
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DailyReport {
    /// Report date
    pub date: NaiveDate,
    /// One entry per commit, in fetch order
    pub tasks: Vec<TaskLine>,
    /// `None` for a day without commits
    pub statistics: Option<Statistics>,
    /// Nonzero categories, highest count first
    pub achievements: Vec<Achievement>,
}

impl DailyReport {
    /// Build the report for `date` from that day's commits, in local time
    #[must_use]
    pub fn build(commits: &[CommitRecord], date: NaiveDate) -> Self {
        Self::build_in(commits, date, &Local)
    }

    /// Build the report with times shown in `tz`
    #[must_use]
    pub fn build_in<Tz>(commits: &[CommitRecord], date: NaiveDate, tz: &Tz) -> Self
    where
        Tz: TimeZone,
        Tz::Offset: fmt::Display,
    {
        if commits.is_empty() {
            return Self {
                date,
                tasks: Vec::new(),
                statistics: None,
                achievements: Vec::new(),
            };
        }

        let tasks = commits
            .iter()
            .enumerate()
            .map(|(i, commit)| TaskLine {
                index: i + 1,
                time: commit.time().map(|t| hour_minute(&t, tz)),
                message: commit.message.clone(),
                hash: commit.hash.clone(),
            })
            .collect();

        Self {
            date,
            tasks,
            statistics: Some(Statistics {
                total_commits: commits.len(),
                working_hours: WorkingHours::from_times(
                    commits.iter().filter_map(CommitRecord::time),
                    tz,
                ),
            }),
            achievements: tally(commits),
        }
    }

    /// Whether the day had no commits
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}

impl fmt::Display for DailyReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "📅 {}の日報\n\n", long_date(self.date))?;

        let Some(stats) = &self.statistics else {
            return write!(f, "❌ 本日はコミットがありませんでした。");
        };

        writeln!(f, "✅ 完了したタスク ({}件のコミット):\n", self.tasks.len())?;
        for task in &self.tasks {
            writeln!(
                f,
                "{}. [{}] {} ({})",
                task.index,
                task.time.as_deref().unwrap_or(UNKNOWN_TIME),
                task.message,
                task.hash
            )?;
        }

        write!(f, "\n📊 統計:\n")?;
        writeln!(f, "- 総コミット数: {}件", stats.total_commits)?;
        match &stats.working_hours {
            Some(hours) => writeln!(f, "- 作業時間帯: {hours}")?,
            None => writeln!(f, "- 作業時間帯: なし")?,
        }

        write!(f, "\n🎯 主な成果:\n")?;
        if self.achievements.is_empty() {
            return write!(f, "- 開発作業を継続実施");
        }
        let lines: Vec<_> = self
            .achievements
            .iter()
            .map(|a| format!("- {}: {}件", a.category.label(), a.count))
            .collect();
        write!(f, "{}", lines.join("\n"))
    }
}

/// Render the text report for `date`
#[must_use]
pub fn generate_daily_report(commits: &[CommitRecord], date: NaiveDate) -> String {
    DailyReport::build(commits, date).to_string()
}
