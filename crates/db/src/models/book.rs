//! Books and the per-user records that hang off them: shelf entries,
//! reading goals and reviews.

use serde::{Deserialize, Serialize};
use shelfwise_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// A row from the `books` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Book {
    pub id: DbId,
    pub title: String,
    pub author: String,
    pub number_of_pages: Option<i32>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new book.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateBook {
    pub title: String,
    pub author: String,
    pub number_of_pages: Option<i32>,
}

/// A row from the `user_books` table: one book on one user's shelf.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct UserBook {
    pub id: DbId,
    pub user_id: DbId,
    pub book_id: DbId,
    pub is_current_book: bool,
    pub progress: i32,
    pub finished_at: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for shelving a book for a user.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateUserBook {
    pub user_id: DbId,
    pub book_id: DbId,
    pub is_current_book: bool,
    pub progress: i32,
    pub finished_at: Option<Timestamp>,
}

/// A row from the `reading_goals` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ReadingGoal {
    pub id: DbId,
    pub user_id: DbId,
    /// One of `books`, `pages`, `time`.
    pub goal_type: String,
    pub target: i32,
    pub deadline: Timestamp,
    pub completed_at: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a reading goal.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateReadingGoal {
    pub user_id: DbId,
    pub goal_type: String,
    pub target: i32,
    pub deadline: Timestamp,
    pub completed_at: Option<Timestamp>,
}

/// A row from the `reviews` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Review {
    pub id: DbId,
    pub user_id: DbId,
    pub book_id: DbId,
    pub rating: i16,
    pub body: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a review.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateReview {
    pub user_id: DbId,
    pub book_id: DbId,
    pub rating: i16,
    pub body: Option<String>,
}
