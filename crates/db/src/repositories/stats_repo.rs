//! Aggregate reading statistics.

use shelfwise_core::stats::ReadingStats;
use shelfwise_core::types::DbId;
use sqlx::PgPool;

/// Read-only aggregation over shelf entries, goals and reviews.
pub struct StatsRepo;

impl StatsRepo {
    /// Compute a user's [`ReadingStats`] in a single round-trip.
    ///
    /// Unknown users yield all-zero stats; callers that need to distinguish
    /// must check the user exists first.
    pub async fn reading_stats(pool: &PgPool, user_id: DbId) -> Result<ReadingStats, sqlx::Error> {
        let (books_read, pages_read, goals_completed, reviews_written, currently_reading): (
            i64,
            i64,
            i64,
            i64,
            i64,
        ) = sqlx::query_as(
            "SELECT
                (SELECT COUNT(*) FROM user_books
                  WHERE user_id = $1 AND finished_at IS NOT NULL),
                (SELECT COALESCE(SUM(b.number_of_pages), 0)::BIGINT
                   FROM user_books ub JOIN books b ON b.id = ub.book_id
                  WHERE ub.user_id = $1 AND ub.finished_at IS NOT NULL),
                (SELECT COUNT(*) FROM reading_goals
                  WHERE user_id = $1 AND completed_at IS NOT NULL),
                (SELECT COUNT(*) FROM reviews WHERE user_id = $1),
                (SELECT COUNT(*) FROM user_books
                  WHERE user_id = $1 AND is_current_book AND finished_at IS NULL)",
        )
        .bind(user_id)
        .fetch_one(pool)
        .await?;

        Ok(ReadingStats {
            books_read,
            pages_read,
            goals_completed,
            reviews_written,
            currently_reading,
        })
    }
}
