//! User entity model and DTOs.

use serde::{Deserialize, Serialize};
use shelfwise_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// Full user row from the `users` table.
///
/// Contains the password hash -- NEVER serialize this to API responses directly.
/// Use [`UserResponse`] for external-facing output.
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: DbId,
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub is_active: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Safe user representation for API responses (no password hash).
#[derive(Debug, Clone, Serialize)]
pub struct UserResponse {
    pub id: DbId,
    pub username: String,
    pub email: String,
    pub created_at: Timestamp,
}

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            username: user.username.clone(),
            email: user.email.clone(),
            created_at: user.created_at,
        }
    }
}

/// DTO for creating a new user.
#[derive(Debug, Deserialize)]
pub struct CreateUser {
    pub username: String,
    pub email: String,
    pub password_hash: String,
}
