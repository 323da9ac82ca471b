//! HTTP-level tests for login and bearer-token enforcement.

mod common;

use axum::http::StatusCode;
use common::{body_json, get_auth, post_json, TEST_PASSWORD};
use shelfwise_db::repositories::UserRepo;
use sqlx::PgPool;

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_login_success(pool: PgPool) {
    let user = common::create_user(&pool, "loginuser").await;
    let app = common::build_test_app(pool);

    let body = serde_json::json!({ "username": "loginuser", "password": TEST_PASSWORD });
    let response = post_json(app.clone(), "/api/v1/auth/login", body).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["user"]["id"], user.id);
    assert_eq!(json["user"]["username"], "loginuser");
    assert!(json["user"].get("password_hash").is_none());
    assert_eq!(json["expires_in"], 15 * 60);

    // The issued token is accepted by protected routes.
    let token = json["access_token"].as_str().expect("access_token");
    let response = get_auth(app, "/api/v1/users/me/stats", token).await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_login_wrong_password(pool: PgPool) {
    common::create_user(&pool, "wrongpw").await;
    let app = common::build_test_app(pool);

    let body = serde_json::json!({ "username": "wrongpw", "password": "incorrect_password" });
    let response = post_json(app, "/api/v1/auth/login", body).await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(body_json(response).await["code"], "UNAUTHORIZED");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_login_unknown_user(pool: PgPool) {
    let app = common::build_test_app(pool);

    let body = serde_json::json!({ "username": "ghost", "password": TEST_PASSWORD });
    let response = post_json(app, "/api/v1/auth/login", body).await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_login_deactivated_account(pool: PgPool) {
    let user = common::create_user(&pool, "gone").await;
    UserRepo::deactivate(&pool, user.id).await.unwrap();
    let app = common::build_test_app(pool);

    let body = serde_json::json!({ "username": "gone", "password": TEST_PASSWORD });
    let response = post_json(app, "/api/v1/auth/login", body).await;

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_protected_route_requires_token(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = common::get(app.clone(), "/api/v1/lending-requests").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let response = get_auth(app, "/api/v1/lending-requests", "not-a-jwt").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(body_json(response).await["code"], "UNAUTHORIZED");
}
