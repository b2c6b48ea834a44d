//! Region/product aggregation.

use std::collections::{BTreeMap, HashSet};

use serde::Serialize;

use crate::SalesTable;

/// One output row of the region/product summary.
///
/// Field names serialize to the column names the chart layer keys on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegionProductRow {
    #[serde(rename = "CountryRegion")]
    pub country_region: String,
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "OrderQty")]
    pub order_qty: i64,
}

/// Sums order quantity per (region, product) group.
///
/// `None` means no filtering on that dimension. An explicit empty set keeps
/// standard membership semantics and therefore matches no rows; the UI-layer
/// convention of treating an empty selection as "select all" stops at this
/// boundary. Every surviving input row lands in exactly one group, and the
/// output is sorted ascending by (region, product).
pub fn summarize_by_region_product(
    table: &SalesTable,
    regions: Option<&HashSet<String>>,
    products: Option<&HashSet<String>>,
) -> Vec<RegionProductRow> {
    let mut groups: BTreeMap<(String, String), i64> = BTreeMap::new();

    for record in table.iter() {
        if let Some(allowed) = regions
            && !allowed.contains(&record.country_region)
        {
            continue;
        }
        if let Some(allowed) = products
            && !allowed.contains(&record.name)
        {
            continue;
        }

        *groups
            .entry((record.country_region.clone(), record.name.clone()))
            .or_insert(0) += i64::from(record.order_qty);
    }

    groups
        .into_iter()
        .map(|((country_region, name), order_qty)| RegionProductRow {
            country_region,
            name,
            order_qty,
        })
        .collect()
}
