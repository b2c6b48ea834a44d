use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::{RawSalesRow, Result, StoreError, source::SalesSource};

/// In-memory sales source for testing.
///
/// Serves a fixed set of rows through the same interface as the PostgreSQL
/// implementation, and can be switched into a failing mode to exercise
/// error paths without a database.
#[derive(Clone, Default)]
pub struct InMemorySalesSource {
    rows: Arc<RwLock<Vec<RawSalesRow>>>,
    failure: Arc<RwLock<Option<String>>>,
}

impl InMemorySalesSource {
    /// Creates a new empty in-memory source.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a source pre-populated with `rows`.
    pub fn with_rows(rows: Vec<RawSalesRow>) -> Self {
        Self {
            rows: Arc::new(RwLock::new(rows)),
            failure: Arc::new(RwLock::new(None)),
        }
    }

    /// Appends a row to the served result set.
    pub async fn push_row(&self, row: RawSalesRow) {
        self.rows.write().await.push(row);
    }

    /// Makes every subsequent fetch fail with the given message.
    pub async fn fail_with(&self, message: impl Into<String>) {
        *self.failure.write().await = Some(message.into());
    }

    /// Returns the number of rows currently served.
    pub async fn row_count(&self) -> usize {
        self.rows.read().await.len()
    }
}

#[async_trait]
impl SalesSource for InMemorySalesSource {
    async fn fetch_sales(&self, sql: &str) -> Result<Vec<RawSalesRow>> {
        if sql.trim().is_empty() {
            return Err(StoreError::EmptyQuery);
        }

        if let Some(message) = self.failure.read().await.clone() {
            return Err(StoreError::QueryExecution(
                std::io::Error::other(message).into(),
            ));
        }

        Ok(self.rows.read().await.clone())
    }
}
