use async_trait::async_trait;
use chrono::{NaiveDate, NaiveDateTime};
use sqlx::{PgPool, Row, postgres::PgRow};

use crate::{
    RawDate, RawSalesRow, Result, StoreError,
    source::SalesSource,
};

/// PostgreSQL-backed sales source.
///
/// Holds a connection pool; each fetch checks a connection out for the
/// duration of the call only, so the connection is released on every exit
/// path, success or failure.
#[derive(Clone)]
pub struct PostgresSalesStore {
    pool: PgPool,
}

impl PostgresSalesStore {
    /// Creates a new PostgreSQL sales store.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Gets a reference to the underlying connection pool.
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Runs the database migrations.
    pub async fn run_migrations(&self) -> Result<()> {
        sqlx::migrate!("../../migrations").run(&self.pool).await?;
        Ok(())
    }

    // Source schemas disagree on the date column type, so decode in order of
    // specificity: DATE, TIMESTAMP, then text.
    fn date_column(row: &PgRow, column: &str) -> sqlx::Result<RawDate> {
        if let Ok(d) = row.try_get::<NaiveDate, _>(column) {
            return Ok(RawDate::Date(d));
        }
        if let Ok(ts) = row.try_get::<NaiveDateTime, _>(column) {
            return Ok(RawDate::Timestamp(ts));
        }
        row.try_get::<String, _>(column).map(RawDate::Text)
    }

    fn row_to_sales(row: &PgRow) -> sqlx::Result<RawSalesRow> {
        Ok(RawSalesRow {
            sales_order_id: row.try_get("SalesOrderID")?,
            order_date: Self::date_column(row, "OrderDate")?,
            ship_to_address_id: row.try_get("ShipToAddressID")?,
            total_due: row.try_get("TotalDue")?,
            address_id: row.try_get("AddressID")?,
            city: row.try_get("City")?,
            state_province: row.try_get("StateProvince")?,
            country_region: row.try_get("CountryRegion")?,
            product_id: row.try_get("ProductID")?,
            unit_price: row.try_get("UnitPrice")?,
            order_qty: row.try_get("OrderQty")?,
            name: row.try_get("Name")?,
            sell_start_date: Self::date_column(row, "SellStartDate")?,
        })
    }
}

#[async_trait]
impl SalesSource for PostgresSalesStore {
    async fn fetch_sales(&self, sql: &str) -> Result<Vec<RawSalesRow>> {
        if sql.trim().is_empty() {
            return Err(StoreError::EmptyQuery);
        }

        metrics::counter!("sales_queries_total").increment(1);
        tracing::debug!(query = sql, "executing sales extract query");

        let rows = sqlx::query(sql).fetch_all(&self.pool).await.map_err(|e| {
            metrics::counter!("sales_query_failures_total").increment(1);
            tracing::error!(error = %e, query = sql, "query execution failed");
            StoreError::from(e)
        })?;

        rows.iter()
            .map(|row| Self::row_to_sales(row).map_err(StoreError::from))
            .collect()
    }
}
