//! Badge categories and qualification rules.
//!
//! Each badge belongs to exactly one [`BadgeCategory`], and each category
//! reads exactly one field of [`ReadingStats`]. A badge qualifies once that
//! statistic reaches the badge's `requirement`.

use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::stats::ReadingStats;
use crate::types::DbId;

/// The statistic a badge is measured against, stored as snake_case text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BadgeCategory {
    BooksRead,
    PagesRead,
    GoalsCompleted,
    ReviewsWritten,
}

/// All badge categories.
pub const ALL_CATEGORIES: &[BadgeCategory] = &[
    BadgeCategory::BooksRead,
    BadgeCategory::PagesRead,
    BadgeCategory::GoalsCompleted,
    BadgeCategory::ReviewsWritten,
];

impl BadgeCategory {
    /// The value stored in `badges.category`.
    pub fn as_str(self) -> &'static str {
        match self {
            BadgeCategory::BooksRead => "books_read",
            BadgeCategory::PagesRead => "pages_read",
            BadgeCategory::GoalsCompleted => "goals_completed",
            BadgeCategory::ReviewsWritten => "reviews_written",
        }
    }

    /// Pick this category's statistic out of a user's totals.
    pub fn statistic(self, stats: &ReadingStats) -> i64 {
        match self {
            BadgeCategory::BooksRead => stats.books_read,
            BadgeCategory::PagesRead => stats.pages_read,
            BadgeCategory::GoalsCompleted => stats.goals_completed,
            BadgeCategory::ReviewsWritten => stats.reviews_written,
        }
    }
}

impl fmt::Display for BadgeCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BadgeCategory {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ALL_CATEGORIES
            .iter()
            .copied()
            .find(|category| category.as_str() == s)
            .ok_or_else(|| {
                CoreError::Validation(format!(
                    "Invalid badge category '{s}'. Must be one of: {}",
                    ALL_CATEGORIES
                        .iter()
                        .map(|c| c.as_str())
                        .collect::<Vec<_>>()
                        .join(", ")
                ))
            })
    }
}

/// A catalog badge reduced to what qualification needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BadgeThreshold {
    pub badge_id: DbId,
    pub category: BadgeCategory,
    pub requirement: i64,
}

impl BadgeThreshold {
    /// Whether `stats` meets this badge's requirement.
    pub fn is_met_by(&self, stats: &ReadingStats) -> bool {
        self.category.statistic(stats) >= self.requirement
    }
}

/// Ids of badges the user now qualifies for and does not already hold,
/// in catalog order.
pub fn newly_qualified(
    stats: &ReadingStats,
    catalog: &[BadgeThreshold],
    already_awarded: &HashSet<DbId>,
) -> Vec<DbId> {
    catalog
        .iter()
        .filter(|badge| !already_awarded.contains(&badge.badge_id))
        .filter(|badge| badge.is_met_by(stats))
        .map(|badge| badge.badge_id)
        .collect()
}
