//! Shared helpers for the API integration tests.

#![allow(dead_code)]

use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use shelfwise_api::auth::jwt::{generate_access_token, JwtConfig};
use shelfwise_api::auth::password::hash_password;
use shelfwise_api::config::ServerConfig;
use shelfwise_api::router::build_app_router;
use shelfwise_api::state::AppState;
use shelfwise_db::models::book::{Book, CreateBook, CreateUserBook};
use shelfwise_db::models::user::{CreateUser, User};
use shelfwise_db::repositories::{BookRepo, UserBookRepo, UserRepo};

pub const TEST_PASSWORD: &str = "test_password_123!";

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        shutdown_timeout_secs: 30,
        jwt: JwtConfig {
            secret: "test-secret-that-is-long-enough-for-hmac".to_string(),
            access_token_expiry_mins: 15,
        },
    }
}

/// Build the production router over `pool`.
pub fn build_test_app(pool: PgPool) -> Router {
    let config = test_config();
    let state = AppState::new(pool, config.clone());
    build_app_router(state, &config)
}

/// Mint a bearer token for `user_id` with the test secret.
pub fn token_for(user_id: i64) -> String {
    generate_access_token(user_id, &test_config().jwt).expect("token generation should succeed")
}

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

/// Create a user whose password is [`TEST_PASSWORD`].
pub async fn create_user(pool: &PgPool, username: &str) -> User {
    let password_hash = hash_password(TEST_PASSWORD).expect("hashing should succeed");
    UserRepo::create(
        pool,
        &CreateUser {
            username: username.to_string(),
            email: format!("{username}@test.com"),
            password_hash,
        },
    )
    .await
    .expect("user creation should succeed")
}

/// Create a book and put it on `user_id`'s shelf.
pub async fn shelved_book(pool: &PgPool, user_id: i64, title: &str) -> Book {
    let book = BookRepo::create(
        pool,
        &CreateBook {
            title: title.to_string(),
            author: "Test Author".to_string(),
            number_of_pages: Some(250),
        },
    )
    .await
    .unwrap();
    UserBookRepo::create(
        pool,
        &CreateUserBook {
            user_id,
            book_id: book.id,
            is_current_book: false,
            progress: 0,
            finished_at: None,
        },
    )
    .await
    .unwrap();
    book
}

// ---------------------------------------------------------------------------
// HTTP helpers
// ---------------------------------------------------------------------------

/// Read the full response body as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

async fn send(
    app: Router,
    method: Method,
    uri: &str,
    token: Option<&str>,
    body: Option<serde_json::Value>,
) -> Response<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header("authorization", format!("Bearer {token}"));
    }
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::GET, uri, None, None).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send(app, Method::POST, uri, None, Some(body)).await
}

pub async fn get_auth(app: Router, uri: &str, token: &str) -> Response<Body> {
    send(app, Method::GET, uri, Some(token), None).await
}

pub async fn post_auth(app: Router, uri: &str, token: &str) -> Response<Body> {
    send(app, Method::POST, uri, Some(token), None).await
}

pub async fn post_json_auth(
    app: Router,
    uri: &str,
    body: serde_json::Value,
    token: &str,
) -> Response<Body> {
    send(app, Method::POST, uri, Some(token), Some(body)).await
}

pub async fn delete_auth(app: Router, uri: &str, token: &str) -> Response<Body> {
    send(app, Method::DELETE, uri, Some(token), None).await
}
