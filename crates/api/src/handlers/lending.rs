//! Handlers for the `/lending-requests` resource.
//!
//! The authenticated user is always the actor: the lender when creating,
//! cancelling or marking returned, the borrower when responding.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;
use shelfwise_core::types::DbId;
use validator::Validate;

use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request types
// ---------------------------------------------------------------------------

/// Request body for `POST /lending-requests`.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateLendingRequestBody {
    pub book_id: DbId,
    pub borrower_id: DbId,
    /// At most 1000 characters.
    #[validate(length(max = 1000))]
    pub message: Option<String>,
}

/// Request body for `POST /lending-requests/{id}/respond`.
#[derive(Debug, Deserialize)]
pub struct RespondBody {
    pub accept: bool,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/v1/lending-requests
///
/// Offer a book on the caller's shelf to another user. Returns 201.
pub async fn create(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(input): Json<CreateLendingRequestBody>,
) -> AppResult<impl IntoResponse> {
    input.validate()?;

    let request = state
        .lending
        .create_request(auth.user_id, input.borrower_id, input.book_id, input.message)
        .await?;

    Ok((StatusCode::CREATED, Json(DataResponse { data: request })))
}

/// GET /api/v1/lending-requests
///
/// Every request the caller lends or borrows in, newest first.
pub async fn list(State(state): State<AppState>, auth: AuthUser) -> AppResult<impl IntoResponse> {
    let requests = state.lending.list_for_user(auth.user_id).await?;
    Ok(Json(DataResponse { data: requests }))
}

/// GET /api/v1/lending-requests/current
///
/// The newest pending request addressed to the caller, or `null`.
pub async fn current(
    State(state): State<AppState>,
    auth: AuthUser,
) -> AppResult<impl IntoResponse> {
    let request = state.lending.current_request_for(auth.user_id).await?;
    Ok(Json(DataResponse { data: request }))
}

/// GET /api/v1/lending-requests/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let request = state.lending.get_for_party(id, auth.user_id).await?;
    Ok(Json(DataResponse { data: request }))
}

/// POST /api/v1/lending-requests/{id}/respond
///
/// Accept or reject a pending request addressed to the caller.
pub async fn respond(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<DbId>,
    Json(input): Json<RespondBody>,
) -> AppResult<impl IntoResponse> {
    let request = state.lending.respond(id, auth.user_id, input.accept).await?;
    Ok(Json(DataResponse { data: request }))
}

/// POST /api/v1/lending-requests/{id}/return
pub async fn mark_returned(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let request = state.lending.mark_returned(id, auth.user_id).await?;
    Ok(Json(DataResponse { data: request }))
}

/// DELETE /api/v1/lending-requests/{id}
///
/// Withdraw a pending request. Returns 204 No Content.
pub async fn cancel(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    state.lending.cancel_request(id, auth.user_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
