//! Lending request lifecycle.
//!
//! Every mutating operation takes the acting user's id explicitly. Rules come
//! from [`shelfwise_core::lending`]; the store applies each change with a
//! conditional statement, so a request that changed between the read and the
//! write is reported as [`CoreError::InvalidState`] rather than overwritten.

use shelfwise_core::error::CoreError;
use shelfwise_core::lending;
use shelfwise_core::types::DbId;
use shelfwise_db::models::lending_request::{
    CreateLendingRequest, LendingRequest, LendingRequestDetail,
};
use shelfwise_db::repositories::lending_request_repo::ACTIVE_LOAN_CONSTRAINT;
use shelfwise_db::repositories::{LendingRequestRepo, UserBookRepo, UserRepo};
use sqlx::PgPool;

use crate::error::{is_unique_violation, EngineError, EngineResult};

/// Governs lending requests between two users.
#[derive(Clone)]
pub struct LendingService {
    pool: PgPool,
}

impl LendingService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Offer a book on the lender's shelf to another user.
    ///
    /// Fails with `Validation` when lender and borrower are the same user,
    /// `NotOwned` when the book is not on the lender's shelf,
    /// `BorrowerNotFound` when the borrower does not exist, and
    /// `DuplicateActiveLoan` when the lender already has an active loan for
    /// the book.
    pub async fn create_request(
        &self,
        lender_id: DbId,
        borrower_id: DbId,
        book_id: DbId,
        message: Option<String>,
    ) -> EngineResult<LendingRequest> {
        lending::validate_parties(lender_id, borrower_id)?;

        if UserBookRepo::find_by_user_and_book(&self.pool, lender_id, book_id)
            .await?
            .is_none()
        {
            return Err(CoreError::NotOwned {
                book_id,
                user_id: lender_id,
            }
            .into());
        }

        if UserRepo::find_by_id(&self.pool, borrower_id).await?.is_none() {
            return Err(CoreError::BorrowerNotFound(borrower_id).into());
        }

        if LendingRequestRepo::find_active(&self.pool, book_id, lender_id)
            .await?
            .is_some()
        {
            return Err(CoreError::DuplicateActiveLoan { book_id, lender_id }.into());
        }

        let input = CreateLendingRequest {
            book_id,
            lender_id,
            borrower_id,
            message,
        };
        let request = match LendingRequestRepo::create(&self.pool, &input).await {
            Ok(request) => request,
            // A concurrent request won the race between the check and the insert.
            Err(err) if is_unique_violation(&err, ACTIVE_LOAN_CONSTRAINT) => {
                return Err(CoreError::DuplicateActiveLoan { book_id, lender_id }.into());
            }
            Err(err) => return Err(err.into()),
        };

        tracing::info!(
            request_id = request.id,
            book_id,
            lender_id,
            borrower_id,
            "Lending request created"
        );

        Ok(request)
    }

    /// Withdraw a pending request. The record is deleted, not kept as
    /// `cancelled`.
    pub async fn cancel_request(
        &self,
        request_id: DbId,
        acting_lender_id: DbId,
    ) -> EngineResult<()> {
        let request = self.load(request_id).await?;
        lending::ensure_lender(acting_lender_id, request.lender_id)?;
        lending::ensure_cancellable(request.lending_status()?)?;

        if !LendingRequestRepo::delete_pending(&self.pool, request_id).await? {
            return Err(self.lost_race(request_id).await);
        }

        tracing::info!(
            request_id,
            book_id = request.book_id,
            lender_id = acting_lender_id,
            "Lending request cancelled"
        );

        Ok(())
    }

    /// Record that an accepted loan has come back to the lender.
    pub async fn mark_returned(
        &self,
        request_id: DbId,
        acting_lender_id: DbId,
    ) -> EngineResult<LendingRequest> {
        let request = self.load(request_id).await?;
        lending::ensure_lender(acting_lender_id, request.lender_id)?;
        lending::ensure_returnable(request.lending_status()?, request.returned_at)?;

        let Some(updated) = LendingRequestRepo::mark_returned(&self.pool, request_id).await? else {
            return Err(self.lost_race(request_id).await);
        };

        tracing::info!(
            request_id,
            book_id = updated.book_id,
            lender_id = acting_lender_id,
            "Lending request marked returned"
        );

        Ok(updated)
    }

    /// Accept or reject a pending request on behalf of its borrower.
    pub async fn respond(
        &self,
        request_id: DbId,
        acting_borrower_id: DbId,
        accept: bool,
    ) -> EngineResult<LendingRequest> {
        let request = self.load(request_id).await?;
        lending::ensure_borrower(acting_borrower_id, request.borrower_id)?;

        let current = request.lending_status()?;
        let next = lending::response_status(accept);
        lending::validate_transition(current, next)?;

        let Some(updated) =
            LendingRequestRepo::transition(&self.pool, request_id, current, next).await?
        else {
            return Err(self.lost_race(request_id).await);
        };

        tracing::info!(
            request_id,
            book_id = updated.book_id,
            borrower_id = acting_borrower_id,
            status = %next,
            "Lending request answered"
        );

        Ok(updated)
    }

    /// The newest pending request addressed to `borrower_id`, if any.
    pub async fn current_request_for(
        &self,
        borrower_id: DbId,
    ) -> EngineResult<Option<LendingRequestDetail>> {
        Ok(LendingRequestRepo::find_current_for_borrower(&self.pool, borrower_id).await?)
    }

    /// Every request the user lends or borrows in, newest first.
    pub async fn list_for_user(&self, user_id: DbId) -> EngineResult<Vec<LendingRequestDetail>> {
        Ok(LendingRequestRepo::list_for_user(&self.pool, user_id).await?)
    }

    /// Fetch one request for a user who is a party to it.
    pub async fn get_for_party(
        &self,
        request_id: DbId,
        actor_id: DbId,
    ) -> EngineResult<LendingRequestDetail> {
        let detail = LendingRequestRepo::find_detail_by_id(&self.pool, request_id)
            .await?
            .ok_or(CoreError::NotFound {
                entity: "LendingRequest",
                id: request_id,
            })?;

        if detail.lender_id != actor_id && detail.borrower_id != actor_id {
            return Err(CoreError::Forbidden(
                "Only the lender or borrower can view this request".to_string(),
            )
            .into());
        }

        Ok(detail)
    }

    async fn load(&self, request_id: DbId) -> EngineResult<LendingRequest> {
        let request = LendingRequestRepo::find_by_id(&self.pool, request_id)
            .await?
            .ok_or(CoreError::NotFound {
                entity: "LendingRequest",
                id: request_id,
            })?;
        Ok(request)
    }

    /// Build the error for a conditional write that matched no row.
    async fn lost_race(&self, request_id: DbId) -> EngineError {
        match self.load(request_id).await {
            Ok(current) => {
                tracing::warn!(
                    request_id,
                    status = %current.status,
                    "Lending request changed concurrently"
                );
                CoreError::InvalidState(format!(
                    "Lending request {request_id} is now '{}'",
                    current.status
                ))
                .into()
            }
            Err(err) => err,
        }
    }
}
