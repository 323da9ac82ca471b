//! HTTP-level tests for badges and reading statistics.

mod common;

use axum::http::StatusCode;
use chrono::Utc;
use common::{body_json, get_auth, post_auth, token_for};
use shelfwise_db::repositories::UserBookRepo;
use sqlx::PgPool;

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_catalog_lists_seeded_badges(pool: PgPool) {
    let user = common::create_user(&pool, "reader").await;
    let app = common::build_test_app(pool);

    let response = get_auth(app, "/api/v1/badges", &token_for(user.id)).await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let badges = json["data"].as_array().unwrap();
    assert_eq!(badges.len(), 9);
    assert!(badges.iter().any(|b| b["name"] == "Bookworm"));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_check_awards_once_and_lists_award(pool: PgPool) {
    let user = common::create_user(&pool, "reader").await;
    let book = common::shelved_book(&pool, user.id, "Middlemarch").await;
    UserBookRepo::mark_finished(&pool, user.id, book.id, Utc::now())
        .await
        .unwrap();
    let token = token_for(user.id);
    let app = common::build_test_app(pool);

    let response = post_auth(app.clone(), "/api/v1/users/me/badges/check", &token).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let awarded = json["data"].as_array().unwrap();
    assert_eq!(awarded.len(), 1);
    assert_eq!(awarded[0]["name"], "First Chapter");

    let response = post_auth(app.clone(), "/api/v1/users/me/badges/check", &token).await;
    assert!(body_json(response).await["data"].as_array().unwrap().is_empty());

    let response = get_auth(app, "/api/v1/users/me/badges", &token).await;
    let json = body_json(response).await;
    let earned = json["data"].as_array().unwrap();
    assert_eq!(earned.len(), 1);
    assert_eq!(earned[0]["name"], "First Chapter");
    assert!(earned[0]["earned_at"].is_string());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_stats_for_caller(pool: PgPool) {
    let user = common::create_user(&pool, "reader").await;
    let book = common::shelved_book(&pool, user.id, "Middlemarch").await;
    UserBookRepo::mark_finished(&pool, user.id, book.id, Utc::now())
        .await
        .unwrap();
    let app = common::build_test_app(pool);

    let response = get_auth(app, "/api/v1/users/me/stats", &token_for(user.id)).await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["books_read"], 1);
    assert_eq!(json["data"]["pages_read"], 250);
    assert_eq!(json["data"]["goals_completed"], 0);
    assert_eq!(json["data"]["reviews_written"], 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_check_for_deleted_user_token_is_empty(pool: PgPool) {
    let app = common::build_test_app(pool);

    // A valid token whose subject no longer exists.
    let response = post_auth(app, "/api/v1/users/me/badges/check", &token_for(424_242)).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_json(response).await["data"].as_array().unwrap().is_empty());
}
