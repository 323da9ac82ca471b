use shelfwise_core::error::CoreError;

/// Error returned by engine operations.
///
/// Domain rule violations arrive as [`CoreError`]; anything the store
/// reports that the engine does not translate is passed through untouched
/// and never retried.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

pub type EngineResult<T> = Result<T, EngineError>;

/// Whether `err` is a PostgreSQL unique violation on `constraint`.
pub(crate) fn is_unique_violation(err: &sqlx::Error, constraint: &str) -> bool {
    match err {
        sqlx::Error::Database(db_err) => {
            db_err.code().as_deref() == Some("23505") && db_err.constraint() == Some(constraint)
        }
        _ => false,
    }
}
