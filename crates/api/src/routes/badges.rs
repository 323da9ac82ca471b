//! Route definitions for badges and per-user reading data.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::badges;
use crate::state::AppState;

/// Routes merged at the `/api/v1` root.
///
/// ```text
/// GET  /badges                    -> catalog
/// GET  /users/me/badges           -> my_badges
/// POST /users/me/badges/check     -> check
/// GET  /users/me/stats            -> my_stats
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/badges", get(badges::catalog))
        .route("/users/me/badges", get(badges::my_badges))
        .route("/users/me/badges/check", post(badges::check))
        .route("/users/me/stats", get(badges::my_stats))
}
