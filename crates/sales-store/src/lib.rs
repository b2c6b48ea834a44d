pub mod error;
pub mod memory;
pub mod postgres;
pub mod query;
pub mod row;
pub mod source;

pub use error::{Result, StoreError};
pub use memory::InMemorySalesSource;
pub use postgres::PostgresSalesStore;
pub use query::sales_extract_sql;
pub use row::{RawDate, RawSalesRow};
pub use source::SalesSource;
