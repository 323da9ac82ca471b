//! Repository for the `user_books` table (shelf entries).

use shelfwise_core::types::{DbId, Timestamp};
use sqlx::PgPool;

use crate::models::book::{CreateUserBook, UserBook};

const COLUMNS: &str =
    "id, user_id, book_id, is_current_book, progress, finished_at, created_at, updated_at";

/// Provides CRUD operations for shelf entries.
pub struct UserBookRepo;

impl UserBookRepo {
    /// Put a book on a user's shelf, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateUserBook) -> Result<UserBook, sqlx::Error> {
        let query = format!(
            "INSERT INTO user_books (user_id, book_id, is_current_book, progress, finished_at)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, UserBook>(&query)
            .bind(input.user_id)
            .bind(input.book_id)
            .bind(input.is_current_book)
            .bind(input.progress)
            .bind(input.finished_at)
            .fetch_one(pool)
            .await
    }

    /// Find the shelf entry for a (user, book) pair.
    pub async fn find_by_user_and_book(
        pool: &PgPool,
        user_id: DbId,
        book_id: DbId,
    ) -> Result<Option<UserBook>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM user_books WHERE user_id = $1 AND book_id = $2");
        sqlx::query_as::<_, UserBook>(&query)
            .bind(user_id)
            .bind(book_id)
            .fetch_optional(pool)
            .await
    }

    /// Mark a shelf entry finished: progress 100, no longer the current book.
    ///
    /// Returns `None` if the user has no entry for the book.
    pub async fn mark_finished(
        pool: &PgPool,
        user_id: DbId,
        book_id: DbId,
        finished_at: Timestamp,
    ) -> Result<Option<UserBook>, sqlx::Error> {
        let query = format!(
            "UPDATE user_books
             SET finished_at = $3, progress = 100, is_current_book = FALSE
             WHERE user_id = $1 AND book_id = $2
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, UserBook>(&query)
            .bind(user_id)
            .bind(book_id)
            .bind(finished_at)
            .fetch_optional(pool)
            .await
    }
}
