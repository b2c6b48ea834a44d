use async_trait::async_trait;

use crate::{RawSalesRow, Result};

/// Core trait for sales row sources.
///
/// A source executes a SQL statement and materializes the entire result set
/// into memory. All implementations must be thread-safe (Send + Sync).
#[async_trait]
pub trait SalesSource: Send + Sync {
    /// Executes `sql` and returns every row of the result set.
    ///
    /// The row count may be zero. Any driver/connection/SQL failure is
    /// returned as [`crate::StoreError::QueryExecution`] wrapping the
    /// original cause; there is no retry and no partial result.
    async fn fetch_sales(&self, sql: &str) -> Result<Vec<RawSalesRow>>;
}
