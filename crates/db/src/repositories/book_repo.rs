//! Repository for the `books` table.

use sqlx::PgPool;

use crate::models::book::{Book, CreateBook};

const COLUMNS: &str = "id, title, author, number_of_pages, created_at, updated_at";

/// Provides CRUD operations for books.
pub struct BookRepo;

impl BookRepo {
    /// Insert a new book, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateBook) -> Result<Book, sqlx::Error> {
        let query = format!(
            "INSERT INTO books (title, author, number_of_pages)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Book>(&query)
            .bind(&input.title)
            .bind(&input.author)
            .bind(input.number_of_pages)
            .fetch_one(pool)
            .await
    }
}
