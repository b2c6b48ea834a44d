//! Pipeline error types.

use thiserror::Error;

/// Errors that can occur during extraction and aggregation.
#[derive(Debug, Error)]
pub enum AnalyticsError {
    /// The database access layer failed.
    #[error("store error: {0}")]
    Store(#[from] sales_store::StoreError),

    /// A date column could not be normalized.
    #[error("cannot convert column {column} value {value:?} to a date")]
    DateConversion {
        column: &'static str,
        value: String,
    },
}

/// Result type for pipeline operations.
pub type Result<T> = std::result::Result<T, AnalyticsError>;
