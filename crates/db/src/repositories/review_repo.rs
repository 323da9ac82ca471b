//! Repository for the `reviews` table.

use sqlx::PgPool;

use crate::models::book::{CreateReview, Review};

const COLUMNS: &str = "id, user_id, book_id, rating, body, created_at, updated_at";

pub struct ReviewRepo;

impl ReviewRepo {
    /// Insert a review, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateReview) -> Result<Review, sqlx::Error> {
        let query = format!(
            "INSERT INTO reviews (user_id, book_id, rating, body)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Review>(&query)
            .bind(input.user_id)
            .bind(input.book_id)
            .bind(input.rating)
            .bind(&input.body)
            .fetch_one(pool)
            .await
    }
}
