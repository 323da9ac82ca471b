//! Handlers for the badge catalog, awards and reading statistics.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;

use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/badges
pub async fn catalog(
    State(state): State<AppState>,
    _auth: AuthUser,
) -> AppResult<impl IntoResponse> {
    let badges = state.badges.catalog().await?;
    Ok(Json(DataResponse { data: badges }))
}

/// GET /api/v1/users/me/badges
///
/// Badges the caller holds, most recently earned first.
pub async fn my_badges(
    State(state): State<AppState>,
    auth: AuthUser,
) -> AppResult<impl IntoResponse> {
    let earned = state.badges.awards_for(auth.user_id).await?;
    Ok(Json(DataResponse { data: earned }))
}

/// POST /api/v1/users/me/badges/check
///
/// Award any badges the caller now qualifies for and return only those.
pub async fn check(State(state): State<AppState>, auth: AuthUser) -> AppResult<impl IntoResponse> {
    let awarded = state.badges.check_and_award(auth.user_id).await?;
    Ok(Json(DataResponse { data: awarded }))
}

/// GET /api/v1/users/me/stats
pub async fn my_stats(
    State(state): State<AppState>,
    auth: AuthUser,
) -> AppResult<impl IntoResponse> {
    let stats = state.badges.reading_stats(auth.user_id).await?;
    Ok(Json(DataResponse { data: stats }))
}
