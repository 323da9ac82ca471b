//! Route definitions for the `/lending-requests` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::lending;
use crate::state::AppState;

/// Routes mounted at `/lending-requests`.
///
/// ```text
/// GET    /                 -> list
/// POST   /                 -> create
/// GET    /current          -> current
/// GET    /{id}             -> get_by_id
/// DELETE /{id}             -> cancel
/// POST   /{id}/respond     -> respond
/// POST   /{id}/return      -> mark_returned
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(lending::list).post(lending::create))
        .route("/current", get(lending::current))
        .route("/{id}", get(lending::get_by_id).delete(lending::cancel))
        .route("/{id}/respond", post(lending::respond))
        .route("/{id}/return", post(lending::mark_returned))
}
