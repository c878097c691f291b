//! Keyword-based classification of commit messages

use nippo_git::CommitRecord;
use serde::Serialize;

/// Kind of work a commit message describes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// New functionality
    NewFeature,
    /// Bug fixes
    BugFix,
    /// Restructuring without behaviour change
    Refactor,
    /// Docs and READMEs
    Documentation,
    /// Tests and specs
    Test,
    /// Styling and UI
    Style,
}

impl Category {
    /// All categories, in tie-break order
    pub const ALL: [Category; 6] = [
        Category::NewFeature,
        Category::BugFix,
        Category::Refactor,
        Category::Documentation,
        Category::Test,
        Category::Style,
    ];

    /// Name shown in the report
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Category::NewFeature => "新機能",
            Category::BugFix => "バグ修正",
            Category::Refactor => "リファクタリング",
            Category::Documentation => "ドキュメント",
            Category::Test => "テスト",
            Category::Style => "スタイル",
        }
    }

    /// Lower-case substrings that put a message in this category
    #[must_use]
    pub fn triggers(self) -> &'static [&'static str] {
        match self {
            Category::NewFeature => &["add", "feat", "追加", "新規", "実装"],
            Category::BugFix => &["fix", "bug", "修正", "バグ"],
            Category::Refactor => &["refactor", "リファクタ", "整理", "改善"],
            Category::Documentation => &["doc", "docs", "readme", "ドキュメント"],
            Category::Test => &["test", "テスト", "spec"],
            Category::Style => &["style", "css", "デザイン", "ui"],
        }
    }

    /// Whether an already lower-cased message contains any trigger
    #[must_use]
    pub fn matches(self, lowered: &str) -> bool {
        self.triggers().iter().any(|t| lowered.contains(t))
    }

    /// Every category a message belongs to, in declaration order
    #[must_use]
    pub fn classify(message: &str) -> Vec<Category> {
        let lowered = message.to_lowercase();
        Self::ALL
            .into_iter()
            .filter(|c| c.matches(&lowered))
            .collect()
    }
}

/// Number of commits in one category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Achievement {
    /// The category
    pub category: Category,
    /// Commits whose message matched it
    pub count: usize,
}

/// Count matching commits per category
///
/// A commit counts toward every category it matches. Only nonzero counts
/// are returned, highest first; equal counts keep declaration order.
#[must_use]
pub fn tally(commits: &[CommitRecord]) -> Vec<Achievement> {
    let mut counts = [0usize; Category::ALL.len()];
    for commit in commits {
        let lowered = commit.message.to_lowercase();
        for (slot, category) in counts.iter_mut().zip(Category::ALL) {
            if category.matches(&lowered) {
                *slot += 1;
            }
        }
    }

    let mut achievements: Vec<_> = Category::ALL
        .into_iter()
        .zip(counts)
        .filter(|&(_, count)| count > 0)
        .map(|(category, count)| Achievement { category, count })
        .collect();
    // sort_by is stable, so ties stay in declaration order
    achievements.sort_by(|a, b| b.count.cmp(&a.count));
    achievements
}
