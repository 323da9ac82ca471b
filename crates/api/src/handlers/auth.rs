//! Handlers for the `/auth` resource.

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};
use shelfwise_core::error::CoreError;
use shelfwise_db::models::user::UserResponse;
use shelfwise_db::repositories::UserRepo;

use crate::auth::jwt::generate_access_token;
use crate::auth::password::verify_password;
use crate::error::{AppError, AppResult};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /auth/login`.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Successful authentication response.
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub access_token: String,
    /// Access token lifetime in seconds.
    pub expires_in: i64,
    pub user: UserResponse,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/v1/auth/login
///
/// Authenticate with username + password and return an access token.
pub async fn login(
    State(state): State<AppState>,
    Json(input): Json<LoginRequest>,
) -> AppResult<Json<AuthResponse>> {
    let invalid = || {
        AppError::Core(CoreError::Unauthorized(
            "Invalid username or password".into(),
        ))
    };

    let user = UserRepo::find_by_username(&state.pool, &input.username)
        .await?
        .ok_or_else(invalid)?;

    if !user.is_active {
        return Err(AppError::Core(CoreError::Forbidden(
            "Account is deactivated".into(),
        )));
    }

    let password_valid = verify_password(&input.password, &user.password_hash)
        .map_err(|e| AppError::InternalError(format!("Password verification error: {e}")))?;
    if !password_valid {
        tracing::info!(user_id = user.id, "Rejected login with wrong password");
        return Err(invalid());
    }

    let access_token = generate_access_token(user.id, &state.config.jwt)
        .map_err(|e| AppError::InternalError(format!("Token generation error: {e}")))?;

    tracing::info!(user_id = user.id, "User logged in");

    Ok(Json(AuthResponse {
        access_token,
        expires_in: state.config.jwt.access_token_expiry_mins * 60,
        user: UserResponse::from(&user),
    }))
}
