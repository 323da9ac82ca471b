use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use shelfwise_core::error::CoreError;
use shelfwise_engine::EngineError;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds HTTP-specific variants.
/// Implements [`IntoResponse`] to produce consistent JSON error responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `shelfwise_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// An internal error with a human-readable message.
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl From<EngineError> for AppError {
    fn from(err: EngineError) -> Self {
        match err {
            EngineError::Core(core) => AppError::Core(core),
            EngineError::Database(db) => AppError::Database(db),
        }
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        AppError::Core(CoreError::Validation(errors.to_string()))
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            // --- CoreError variants ---
            AppError::Core(core) => classify_core_error(core),

            // --- Database errors ---
            AppError::Database(err) => classify_sqlx_error(err),

            // --- HTTP-specific errors ---
            AppError::InternalError(msg) => {
                tracing::error!(error = %msg, "Internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal error occurred".to_string(),
                )
            }
        };

        let body = json!({
            "error": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}

fn classify_core_error(core: &CoreError) -> (StatusCode, &'static str, String) {
    match core {
        CoreError::NotFound { entity, id } => (
            StatusCode::NOT_FOUND,
            "NOT_FOUND",
            format!("{entity} with id {id} not found"),
        ),
        CoreError::BorrowerNotFound(_) => (
            StatusCode::NOT_FOUND,
            "BORROWER_NOT_FOUND",
            core.to_string(),
        ),
        CoreError::NotOwned { .. } => (
            StatusCode::UNPROCESSABLE_ENTITY,
            "NOT_OWNED",
            core.to_string(),
        ),
        CoreError::InvalidState(msg) => (StatusCode::CONFLICT, "INVALID_STATE", msg.clone()),
        CoreError::DuplicateActiveLoan { .. } => (
            StatusCode::CONFLICT,
            "DUPLICATE_ACTIVE_LOAN",
            core.to_string(),
        ),
        CoreError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
        CoreError::Conflict(msg) => (StatusCode::CONFLICT, "CONFLICT", msg.clone()),
        CoreError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, "UNAUTHORIZED", msg.clone()),
        CoreError::Forbidden(msg) => (StatusCode::FORBIDDEN, "FORBIDDEN", msg.clone()),
        CoreError::Internal(msg) => {
            tracing::error!(error = %msg, "Internal core error");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_ERROR",
                "An internal error occurred".to_string(),
            )
        }
    }
}

/// Classify a sqlx error into an HTTP status, error code, and message.
///
/// - `RowNotFound` maps to 404.
/// - Unique constraint violations (constraint name starting with `uq_`) map to 409.
/// - Everything else maps to 500 with a sanitized message.
fn classify_sqlx_error(err: &sqlx::Error) -> (StatusCode, &'static str, String) {
    match err {
        sqlx::Error::RowNotFound => (
            StatusCode::NOT_FOUND,
            "NOT_FOUND",
            "Resource not found".to_string(),
        ),
        sqlx::Error::Database(db_err) => {
            // PostgreSQL unique constraint violation: error code 23505
            if db_err.code().as_deref() == Some("23505") {
                let constraint = db_err.constraint().unwrap_or("unknown");
                if constraint.starts_with("uq_") {
                    return (
                        StatusCode::CONFLICT,
                        "CONFLICT",
                        format!("Duplicate value violates unique constraint: {constraint}"),
                    );
                }
            }
            tracing::error!(error = %db_err, "Database error");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_ERROR",
                "An internal error occurred".to_string(),
            )
        }
        other => {
            tracing::error!(error = %other, "Database error");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_ERROR",
                "An internal error occurred".to_string(),
            )
        }
    }
}
