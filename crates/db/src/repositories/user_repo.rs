//! Repository for the `users` table.

use shelfwise_core::types::DbId;
use sqlx::PgPool;

use crate::models::user::{CreateUser, User};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, username, email, password_hash, is_active, created_at, updated_at";

/// Provides CRUD operations for users.
pub struct UserRepo;

impl UserRepo {
    /// Insert a new user, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateUser) -> Result<User, sqlx::Error> {
        let query = format!(
            "INSERT INTO users (username, email, password_hash)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, User>(&query)
            .bind(&input.username)
            .bind(&input.email)
            .bind(&input.password_hash)
            .fetch_one(pool)
            .await
    }

    /// Find a user by internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<User>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM users WHERE id = $1");
        sqlx::query_as::<_, User>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a user by username (case-sensitive).
    pub async fn find_by_username(
        pool: &PgPool,
        username: &str,
    ) -> Result<Option<User>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM users WHERE username = $1");
        sqlx::query_as::<_, User>(&query)
            .bind(username)
            .fetch_optional(pool)
            .await
    }

    /// Deactivate a user. Returns `true` if a row was updated.
    pub async fn deactivate(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("UPDATE users SET is_active = FALSE WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
