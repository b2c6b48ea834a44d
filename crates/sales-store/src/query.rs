//! SQL text for the sales extract.

/// Returns the fixed extract query.
///
/// Joins order headers, ship-to addresses, order lines and products into the
/// denormalized row shape the dashboard aggregates over. Column aliases are
/// quoted so the result-set keys match the lookups in the Postgres row
/// mapper exactly; money columns are cast to `float8` and the quantity to
/// `int4` so decoding needs no driver-specific numeric types.
pub fn sales_extract_sql() -> &'static str {
    r#"
    SELECT
        soh.sales_order_id     AS "SalesOrderID",
        soh.order_date         AS "OrderDate",
        soh.ship_to_address_id AS "ShipToAddressID",
        soh.total_due::float8  AS "TotalDue",
        a.address_id           AS "AddressID",
        a.city                 AS "City",
        a.state_province       AS "StateProvince",
        a.country_region       AS "CountryRegion",
        sod.product_id         AS "ProductID",
        sod.unit_price::float8 AS "UnitPrice",
        sod.order_qty::int4    AS "OrderQty",
        p.name                 AS "Name",
        p.sell_start_date      AS "SellStartDate"
    FROM saleslt.sales_order_header soh
    JOIN saleslt.address a
        ON soh.ship_to_address_id = a.address_id
    JOIN saleslt.sales_order_detail sod
        ON sod.sales_order_id = soh.sales_order_id
    JOIN saleslt.product p
        ON p.product_id = sod.product_id
    "#
}
