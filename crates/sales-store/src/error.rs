use thiserror::Error;

/// Errors that can occur when fetching rows from the sales database.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The query could not be executed.
    /// Carries the original driver/connection/SQL cause for diagnostics.
    #[error("query execution failed: {0}")]
    QueryExecution(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// The caller supplied an empty SQL string.
    #[error("query text is empty")]
    EmptyQuery,

    /// A database migration error occurred.
    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
}

impl From<sqlx::Error> for StoreError {
    fn from(e: sqlx::Error) -> Self {
        StoreError::QueryExecution(Box::new(e))
    }
}

/// Result type for store operations.
pub type Result<T> = std::result::Result<T, StoreError>;
