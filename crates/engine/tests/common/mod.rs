//! Fixtures shared by the engine integration tests.

#![allow(dead_code)]

use chrono::Utc;
use shelfwise_db::models::book::{Book, CreateBook, CreateUserBook};
use shelfwise_db::models::user::{CreateUser, User};
use shelfwise_db::repositories::{BookRepo, UserBookRepo, UserRepo};
use sqlx::PgPool;

pub async fn new_user(pool: &PgPool, username: &str) -> User {
    UserRepo::create(
        pool,
        &CreateUser {
            username: username.to_string(),
            email: format!("{username}@test.com"),
            password_hash: "not-a-real-hash".to_string(),
        },
    )
    .await
    .unwrap()
}

pub async fn new_book(pool: &PgPool, title: &str, pages: Option<i32>) -> Book {
    BookRepo::create(
        pool,
        &CreateBook {
            title: title.to_string(),
            author: "Test Author".to_string(),
            number_of_pages: pages,
        },
    )
    .await
    .unwrap()
}

/// Put `book_id` on the user's shelf as currently reading.
pub async fn shelve(pool: &PgPool, user_id: i64, book_id: i64) {
    UserBookRepo::create(
        pool,
        &CreateUserBook {
            user_id,
            book_id,
            is_current_book: true,
            progress: 0,
            finished_at: None,
        },
    )
    .await
    .unwrap();
}

/// Shelve a new book and mark it finished.
pub async fn finish_new_book(pool: &PgPool, user_id: i64, pages: Option<i32>) -> Book {
    let book = new_book(pool, "Finished", pages).await;
    shelve(pool, user_id, book.id).await;
    UserBookRepo::mark_finished(pool, user_id, book.id, Utc::now())
        .await
        .unwrap()
        .expect("shelf entry should exist");
    book
}
