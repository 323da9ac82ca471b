pub mod auth;
pub mod badges;
pub mod health;
pub mod lending;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/login                                      login (public)
///
/// /lending-requests                                create, list
/// /lending-requests/current                        newest pending request for caller
/// /lending-requests/{id}                           get, cancel (DELETE)
/// /lending-requests/{id}/respond                   accept / reject (borrower)
/// /lending-requests/{id}/return                    mark returned (lender)
///
/// /badges                                          catalog
/// /users/me/badges                                 caller's awards
/// /users/me/badges/check                           award newly earned badges (POST)
/// /users/me/stats                                  caller's reading statistics
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .nest("/lending-requests", lending::router())
        .merge(badges::router())
}
