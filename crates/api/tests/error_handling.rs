//! Tests for `AppError` → HTTP response mapping.
//!
//! These call `IntoResponse` directly; no server or database is needed.

use axum::http::StatusCode;
use axum::response::IntoResponse;
use http_body_util::BodyExt;
use shelfwise_api::error::AppError;
use shelfwise_core::error::CoreError;
use shelfwise_engine::EngineError;

/// Convert an `AppError` into its status code and parsed JSON body.
async fn error_to_response(err: AppError) -> (StatusCode, serde_json::Value) {
    let response = err.into_response();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    (status, json)
}

// ---------------------------------------------------------------------------
// Lending errors
// ---------------------------------------------------------------------------

#[tokio::test]
async fn not_found_error_returns_404() {
    let err = AppError::Core(CoreError::NotFound {
        entity: "LendingRequest",
        id: 42,
    });

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["code"], "NOT_FOUND");
    assert_eq!(json["error"], "LendingRequest with id 42 not found");
}

#[tokio::test]
async fn borrower_not_found_has_its_own_code() {
    let (status, json) = error_to_response(CoreError::BorrowerNotFound(7).into()).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["code"], "BORROWER_NOT_FOUND");
}

#[tokio::test]
async fn not_owned_returns_422() {
    let err = CoreError::NotOwned {
        book_id: 3,
        user_id: 1,
    };

    let (status, json) = error_to_response(err.into()).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(json["code"], "NOT_OWNED");
}

#[tokio::test]
async fn duplicate_loan_and_invalid_state_are_conflicts() {
    let (status, json) = error_to_response(
        CoreError::DuplicateActiveLoan {
            book_id: 3,
            lender_id: 1,
        }
        .into(),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(json["code"], "DUPLICATE_ACTIVE_LOAN");

    let (status, json) =
        error_to_response(CoreError::InvalidState("already returned".into()).into()).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(json["code"], "INVALID_STATE");
    assert_eq!(json["error"], "already returned");
}

#[tokio::test]
async fn forbidden_returns_403() {
    let (status, json) =
        error_to_response(CoreError::Forbidden("Only the lender can do that".into()).into()).await;

    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(json["code"], "FORBIDDEN");
}

// ---------------------------------------------------------------------------
// Engine and internal errors
// ---------------------------------------------------------------------------

#[tokio::test]
async fn engine_error_keeps_domain_mapping() {
    let err: AppError = EngineError::Core(CoreError::Validation("bad".into())).into();

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn row_not_found_returns_404() {
    let err: AppError = EngineError::Database(sqlx::Error::RowNotFound).into();

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["code"], "NOT_FOUND");
}

#[tokio::test]
async fn internal_error_message_is_sanitized() {
    let err = AppError::Core(CoreError::Internal("pool exhausted at 10.0.0.3".into()));

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["code"], "INTERNAL_ERROR");
    assert_eq!(json["error"], "An internal error occurred");
}
