use crate::types::DbId;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    #[error("Borrower not found: user with id {0}")]
    BorrowerNotFound(DbId),

    #[error("User {user_id} does not hold book {book_id}")]
    NotOwned { book_id: DbId, user_id: DbId },

    #[error("Invalid state: {0}")]
    InvalidState(String),

    #[error("Book {book_id} already has an active loan from user {lender_id}")]
    DuplicateActiveLoan { book_id: DbId, lender_id: DbId },

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Internal error: {0}")]
    Internal(String),
}
