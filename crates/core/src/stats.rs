//! Aggregate reading statistics for a single user.

use serde::Serialize;

/// Per-user totals computed from shelf, goal and review records.
///
/// `books_read` counts shelf entries with a finish date; `pages_read` sums
/// the page counts of those same books (books without a page count add 0).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ReadingStats {
    pub books_read: i64,
    pub pages_read: i64,
    pub goals_completed: i64,
    pub reviews_written: i64,
    /// Books flagged as currently being read and not yet finished.
    pub currently_reading: i64,
}
