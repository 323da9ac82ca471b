//! Repository for the `lending_requests` table.
//!
//! Status changes are conditional updates keyed on the expected current
//! status, so a request that moved underneath the caller yields `None`
//! instead of being overwritten.

use shelfwise_core::lending::LendingStatus;
use shelfwise_core::types::DbId;
use sqlx::PgPool;

use crate::models::lending_request::{
    CreateLendingRequest, LendingRequest, LendingRequestDetail,
};

/// Name of the partial unique index guarding one active loan per (book, lender).
pub const ACTIVE_LOAN_CONSTRAINT: &str = "uq_lending_requests_active";

/// Column list for lending_requests queries.
const COLUMNS: &str = "id, book_id, lender_id, borrower_id, message, status, returned_at, \
    created_at, updated_at";

/// Select list and joins for [`LendingRequestDetail`] queries.
const DETAIL_SELECT: &str = "SELECT lr.id, lr.book_id, b.title AS book_title, \
        lr.lender_id, l.username AS lender_username, \
        lr.borrower_id, br.username AS borrower_username, \
        lr.message, lr.status, lr.returned_at, lr.created_at, lr.updated_at \
    FROM lending_requests lr \
    JOIN books b ON b.id = lr.book_id \
    JOIN users l ON l.id = lr.lender_id \
    JOIN users br ON br.id = lr.borrower_id";

/// Provides CRUD and lifecycle operations for lending requests.
pub struct LendingRequestRepo;

impl LendingRequestRepo {
    /// Insert a new `pending` request, returning the created row.
    ///
    /// Fails with a unique violation on [`ACTIVE_LOAN_CONSTRAINT`] if an
    /// active loan already exists for the book and lender.
    pub async fn create(
        pool: &PgPool,
        input: &CreateLendingRequest,
    ) -> Result<LendingRequest, sqlx::Error> {
        let query = format!(
            "INSERT INTO lending_requests (book_id, lender_id, borrower_id, message, status)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, LendingRequest>(&query)
            .bind(input.book_id)
            .bind(input.lender_id)
            .bind(input.borrower_id)
            .bind(&input.message)
            .bind(LendingStatus::Pending.as_str())
            .fetch_one(pool)
            .await
    }

    /// Find a lending request by its ID.
    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<LendingRequest>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM lending_requests WHERE id = $1");
        sqlx::query_as::<_, LendingRequest>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find the active (pending, or accepted and not returned) loan of a
    /// book by a lender, if any.
    pub async fn find_active(
        pool: &PgPool,
        book_id: DbId,
        lender_id: DbId,
    ) -> Result<Option<LendingRequest>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM lending_requests
             WHERE book_id = $1 AND lender_id = $2
               AND status IN ($3, $4) AND returned_at IS NULL
             LIMIT 1"
        );
        sqlx::query_as::<_, LendingRequest>(&query)
            .bind(book_id)
            .bind(lender_id)
            .bind(LendingStatus::Pending.as_str())
            .bind(LendingStatus::Accepted.as_str())
            .fetch_optional(pool)
            .await
    }

    /// Move a request from `from` to `to` if it is still in `from`.
    ///
    /// Returns `None` when the request does not exist or is no longer in `from`.
    pub async fn transition(
        pool: &PgPool,
        id: DbId,
        from: LendingStatus,
        to: LendingStatus,
    ) -> Result<Option<LendingRequest>, sqlx::Error> {
        let query = format!(
            "UPDATE lending_requests SET status = $3
             WHERE id = $1 AND status = $2 AND returned_at IS NULL
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, LendingRequest>(&query)
            .bind(id)
            .bind(from.as_str())
            .bind(to.as_str())
            .fetch_optional(pool)
            .await
    }

    /// Mark an accepted, unreturned loan as returned now.
    ///
    /// Returns `None` when the request is not accepted or already returned.
    pub async fn mark_returned(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<LendingRequest>, sqlx::Error> {
        let query = format!(
            "UPDATE lending_requests SET status = $2, returned_at = NOW()
             WHERE id = $1 AND status = $3 AND returned_at IS NULL
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, LendingRequest>(&query)
            .bind(id)
            .bind(LendingStatus::Returned.as_str())
            .bind(LendingStatus::Accepted.as_str())
            .fetch_optional(pool)
            .await
    }

    /// Delete a request only while it is still pending.
    ///
    /// Returns `true` if a row was removed.
    pub async fn delete_pending(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM lending_requests WHERE id = $1 AND status = $2")
            .bind(id)
            .bind(LendingStatus::Pending.as_str())
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Find a request with book title and usernames.
    pub async fn find_detail_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<LendingRequestDetail>, sqlx::Error> {
        let query = format!("{DETAIL_SELECT} WHERE lr.id = $1");
        sqlx::query_as::<_, LendingRequestDetail>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// The newest pending request addressed to a borrower.
    pub async fn find_current_for_borrower(
        pool: &PgPool,
        borrower_id: DbId,
    ) -> Result<Option<LendingRequestDetail>, sqlx::Error> {
        let query = format!(
            "{DETAIL_SELECT}
             WHERE lr.borrower_id = $1 AND lr.status = $2
             ORDER BY lr.created_at DESC, lr.id DESC
             LIMIT 1"
        );
        sqlx::query_as::<_, LendingRequestDetail>(&query)
            .bind(borrower_id)
            .bind(LendingStatus::Pending.as_str())
            .fetch_optional(pool)
            .await
    }

    /// All requests where the user is lender or borrower, newest first.
    pub async fn list_for_user(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<Vec<LendingRequestDetail>, sqlx::Error> {
        let query = format!(
            "{DETAIL_SELECT}
             WHERE lr.lender_id = $1 OR lr.borrower_id = $1
             ORDER BY lr.created_at DESC, lr.id DESC"
        );
        sqlx::query_as::<_, LendingRequestDetail>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }
}
