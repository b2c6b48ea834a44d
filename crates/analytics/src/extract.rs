//! Extraction step: runs the extract query and normalizes dates.

use chrono::NaiveDate;
use sales_store::{RawDate, RawSalesRow, SalesSource, sales_extract_sql};

use crate::{AnalyticsError, Result, SalesRecord, SalesTable};

/// Text layouts accepted when a date column arrives as a string.
const DATE_LAYOUTS: &[&str] = &["%Y-%m-%d", "%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"];

fn normalize_date(column: &'static str, raw: &RawDate) -> Result<NaiveDate> {
    match raw {
        RawDate::Date(d) => Ok(*d),
        RawDate::Timestamp(ts) => Ok(ts.date()),
        RawDate::Text(s) => {
            let trimmed = s.trim();
            DATE_LAYOUTS
                .iter()
                .find_map(|layout| NaiveDate::parse_from_str(trimmed, layout).ok())
                .ok_or_else(|| {
                    tracing::error!(column, value = %s, "date normalization failed");
                    AnalyticsError::DateConversion {
                        column,
                        value: s.clone(),
                    }
                })
        }
    }
}

fn record_from_raw(raw: RawSalesRow) -> Result<SalesRecord> {
    let order_date = normalize_date("OrderDate", &raw.order_date)?;
    let sell_start_date = normalize_date("SellStartDate", &raw.sell_start_date)?;

    Ok(SalesRecord {
        sales_order_id: raw.sales_order_id,
        order_date,
        ship_to_address_id: raw.ship_to_address_id,
        total_due: raw.total_due,
        address_id: raw.address_id,
        city: raw.city,
        state_province: raw.state_province,
        country_region: raw.country_region,
        product_id: raw.product_id,
        unit_price: raw.unit_price,
        order_qty: raw.order_qty,
        name: raw.name,
        sell_start_date,
    })
}

/// Runs the sales extract against `source` and normalizes the result into a
/// [`SalesTable`].
///
/// Store failures propagate unchanged; a malformed date fails the whole
/// extraction, so the caller never sees a partial table.
#[tracing::instrument(skip_all)]
pub async fn extract_sales<S: SalesSource>(source: &S) -> Result<SalesTable> {
    let raw = source.fetch_sales(sales_extract_sql()).await?;

    let records = raw
        .into_iter()
        .map(record_from_raw)
        .collect::<Result<Vec<_>>>()?;

    metrics::counter!("sales_rows_extracted").increment(records.len() as u64);
    tracing::info!(
        rows = records.len(),
        columns = RawSalesRow::COLUMN_COUNT,
        "sales extract complete"
    );

    Ok(SalesTable::new(records))
}
