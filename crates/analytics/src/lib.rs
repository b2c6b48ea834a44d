//! Read-side transforms for the sales reporting pipeline.
//!
//! This crate turns raw store rows into the typed [`SalesTable`] and derives
//! the two chart datasets from it:
//! - [`summarize_by_region_product`] for quantity per (region, product)
//! - [`summarize_by_time`] for quantity per calendar year-month
//!
//! Both aggregations read an immutable table snapshot and return new derived
//! tables; neither mutates its input.

pub mod error;
pub mod extract;
pub mod region_product;
pub mod table;
pub mod time_window;

pub use error::{AnalyticsError, Result};
pub use extract::extract_sales;
pub use region_product::{RegionProductRow, summarize_by_region_product};
pub use table::{SalesRecord, SalesTable};
pub use time_window::{TimeBucketRow, summarize_by_time};
