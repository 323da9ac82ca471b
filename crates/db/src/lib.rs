//! PostgreSQL persistence for Shelfwise.
//!
//! - [`models`] -- row structs and insert DTOs.
//! - [`repositories`] -- zero-sized repos with async queries over `&PgPool`.

use sqlx::postgres::PgPoolOptions;

pub mod models;
pub mod repositories;

pub type DbPool = sqlx::PgPool;

/// Default upper bound on pooled connections.
pub const DEFAULT_MAX_CONNECTIONS: u32 = 20;

/// Create a connection pool from a database URL.
pub async fn create_pool(database_url: &str, max_connections: u32) -> Result<DbPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await
}

/// Round-trip a trivial query to confirm the database is reachable.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Apply pending migrations from `db/migrations`.
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("../../db/migrations").run(pool).await
}
