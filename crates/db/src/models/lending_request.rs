//! Lending request models.

use serde::{Deserialize, Serialize};
use shelfwise_core::error::CoreError;
use shelfwise_core::lending::{self, LendingStatus};
use shelfwise_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// A row from the `lending_requests` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct LendingRequest {
    pub id: DbId,
    pub book_id: DbId,
    pub lender_id: DbId,
    pub borrower_id: DbId,
    pub message: Option<String>,
    pub status: String,
    pub returned_at: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl LendingRequest {
    /// Parse the stored status text.
    pub fn lending_status(&self) -> Result<LendingStatus, CoreError> {
        self.status.parse()
    }

    /// Whether this row still blocks a new loan of the same book by the
    /// same lender.
    pub fn is_active_loan(&self) -> bool {
        self.lending_status()
            .map(|status| lending::is_active_loan(status, self.returned_at))
            .unwrap_or(false)
    }

    /// Whether `user_id` is the lender or the borrower.
    pub fn involves(&self, user_id: DbId) -> bool {
        self.lender_id == user_id || self.borrower_id == user_id
    }
}

/// A lending request joined with the book title and both usernames, as
/// shown in request lists and the incoming-request popup.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct LendingRequestDetail {
    pub id: DbId,
    pub book_id: DbId,
    pub book_title: String,
    pub lender_id: DbId,
    pub lender_username: String,
    pub borrower_id: DbId,
    pub borrower_username: String,
    pub message: Option<String>,
    pub status: String,
    pub returned_at: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for inserting a new pending lending request.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateLendingRequest {
    pub book_id: DbId,
    pub lender_id: DbId,
    pub borrower_id: DbId,
    pub message: Option<String>,
}
