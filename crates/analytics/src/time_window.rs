//! Time-window aggregation.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::Serialize;

use crate::SalesTable;

/// One output row of the time summary.
///
/// The summed quantity serializes under the `Vendas` label the chart layer
/// keys on, regardless of the internal field name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimeBucketRow {
    #[serde(rename = "YearMonth")]
    pub year_month: String,
    #[serde(rename = "Vendas")]
    pub sales: i64,
}

/// Sums order quantity per calendar year-month over an inclusive date window
/// on `sell_start_date`.
///
/// An inverted window (`start > end`) matches nothing and yields an empty
/// summary rather than an error. Buckets come back ascending by year-month, and
/// only buckets with at least one qualifying row appear.
pub fn summarize_by_time(table: &SalesTable, start: NaiveDate, end: NaiveDate) -> Vec<TimeBucketRow> {
    let mut buckets: BTreeMap<String, i64> = BTreeMap::new();

    for record in table.iter() {
        if record.sell_start_date < start || record.sell_start_date > end {
            continue;
        }

        let key = record.sell_start_date.format("%Y-%m").to_string();
        *buckets.entry(key).or_insert(0) += i64::from(record.order_qty);
    }

    buckets
        .into_iter()
        .map(|(year_month, sales)| TimeBucketRow { year_month, sales })
        .collect()
}
