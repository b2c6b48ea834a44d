use chrono::{NaiveDate, NaiveDateTime};

/// A date value as returned by the driver, before normalization.
///
/// Depending on the source schema, the extract query may surface the two date
/// columns as native DATE/TIMESTAMP values or as text. Downstream consumers
/// only ever see `chrono::NaiveDate`; the conversion happens in the
/// extraction step, not here.
#[derive(Debug, Clone, PartialEq)]
pub enum RawDate {
    Date(NaiveDate),
    Timestamp(NaiveDateTime),
    Text(String),
}

impl From<NaiveDate> for RawDate {
    fn from(d: NaiveDate) -> Self {
        RawDate::Date(d)
    }
}

impl From<NaiveDateTime> for RawDate {
    fn from(ts: NaiveDateTime) -> Self {
        RawDate::Timestamp(ts)
    }
}

impl From<&str> for RawDate {
    fn from(s: &str) -> Self {
        RawDate::Text(s.to_string())
    }
}

/// One row of the sales extract, straight off the driver.
///
/// Field order matches the column order of [`crate::sales_extract_sql`].
#[derive(Debug, Clone, PartialEq)]
pub struct RawSalesRow {
    pub sales_order_id: i32,
    pub order_date: RawDate,
    pub ship_to_address_id: i32,
    pub total_due: f64,
    pub address_id: i32,
    pub city: String,
    pub state_province: String,
    pub country_region: String,
    pub product_id: i32,
    pub unit_price: f64,
    pub order_qty: i32,
    pub name: String,
    pub sell_start_date: RawDate,
}

impl RawSalesRow {
    /// Number of columns in the extract result set.
    pub const COLUMN_COUNT: usize = 13;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raw_date_from_naive_date() {
        let d = NaiveDate::from_ymd_opt(2023, 1, 15).unwrap();
        assert_eq!(RawDate::from(d), RawDate::Date(d));
    }

    #[test]
    fn raw_date_from_str() {
        assert_eq!(
            RawDate::from("2023-01-15"),
            RawDate::Text("2023-01-15".to_string())
        );
    }
}
