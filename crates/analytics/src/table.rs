use std::collections::BTreeSet;

use chrono::NaiveDate;

/// One normalized row of the sales extract.
///
/// All fields originate from the join query; the two date columns are the
/// only derived values (normalized from their raw driver representation by
/// the extraction step).
#[derive(Debug, Clone, PartialEq)]
pub struct SalesRecord {
    pub sales_order_id: i32,
    pub order_date: NaiveDate,
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
    pub sell_start_date: NaiveDate,
}

/// The extracted sales table: an ordered, immutable snapshot of
/// [`SalesRecord`] rows held in memory for the session.
///
/// Created once per session load; both aggregations read it and produce new
/// derived tables without mutating it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SalesTable {
    records: Vec<SalesRecord>,
}

impl SalesTable {
    /// Wraps the given rows.
    pub fn new(records: Vec<SalesRecord>) -> Self {
        Self { records }
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// True when the table holds no rows.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterates over the rows in extraction order.
    pub fn iter(&self) -> std::slice::Iter<'_, SalesRecord> {
        self.records.iter()
    }

    /// The rows as a slice.
    pub fn records(&self) -> &[SalesRecord] {
        &self.records
    }

    /// Distinct region values, ascending. Feeds the UI filter defaults.
    pub fn distinct_regions(&self) -> Vec<String> {
        self.distinct(|r| r.country_region.as_str())
    }

    /// Distinct product names, ascending. Feeds the UI filter defaults.
    pub fn distinct_products(&self) -> Vec<String> {
        self.distinct(|r| r.name.as_str())
    }

    fn distinct(&self, key: impl Fn(&SalesRecord) -> &str) -> Vec<String> {
        let set: BTreeSet<&str> = self.records.iter().map(|r| key(r)).collect();
        set.into_iter().map(String::from).collect()
    }
}

impl From<Vec<SalesRecord>> for SalesTable {
    fn from(records: Vec<SalesRecord>) -> Self {
        Self::new(records)
    }
}

impl<'a> IntoIterator for &'a SalesTable {
    type Item = &'a SalesRecord;
    type IntoIter = std::slice::Iter<'a, SalesRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
