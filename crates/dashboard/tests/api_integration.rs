//! Integration tests for the dashboard server.

use std::sync::OnceLock;

use analytics::{SalesRecord, SalesTable};
use axum::body::Body;
use axum::http::{Request, StatusCode};
use chrono::NaiveDate;
use metrics_exporter_prometheus::PrometheusHandle;
use tower::ServiceExt;

static METRICS_HANDLE: OnceLock<PrometheusHandle> = OnceLock::new();

fn get_metrics_handle() -> PrometheusHandle {
    METRICS_HANDLE
        .get_or_init(|| {
            let builder = metrics_exporter_prometheus::PrometheusBuilder::new();
            builder
                .install_recorder()
                .expect("failed to install Prometheus recorder")
        })
        .clone()
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn record(region: &str, product: &str, qty: i32, sell_start: NaiveDate) -> SalesRecord {
    SalesRecord {
        sales_order_id: 71774,
        order_date: date(2008, 6, 1),
        ship_to_address_id: 1092,
        total_due: 972.785,
        address_id: 1092,
        city: "Bothell".to_string(),
        state_province: "Washington".to_string(),
        country_region: region.to_string(),
        product_id: 836,
        unit_price: 356.898,
        order_qty: qty,
        name: product.to_string(),
        sell_start_date: sell_start,
    }
}

fn sample_table() -> SalesTable {
    SalesTable::new(vec![
        record("United States", "Widget", 10, date(2023, 1, 15)),
        record("United States", "Widget", 5, date(2023, 1, 20)),
        record("Germany", "Gadget", 3, date(2023, 2, 20)),
    ])
}

fn setup() -> axum::Router {
    let state = dashboard::create_state(sample_table());
    dashboard::create_app(state, get_metrics_handle())
}

async fn get_json(app: axum::Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    (status, json)
}

#[tokio::test]
async fn test_health_check() {
    let (status, json) = get_json(setup(), "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "ok");
    assert_eq!(json["rows"], 3);
}

#[tokio::test]
async fn test_filters_return_distinct_values() {
    let (status, json) = get_json(setup(), "/filters").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        json["regions"],
        serde_json::json!(["Germany", "United States"])
    );
    assert_eq!(json["products"], serde_json::json!(["Gadget", "Widget"]));
}

#[tokio::test]
async fn test_region_product_without_filters() {
    let (status, json) = get_json(setup(), "/charts/region-product").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        json,
        serde_json::json!([
            { "CountryRegion": "Germany", "Name": "Gadget", "OrderQty": 3 },
            { "CountryRegion": "United States", "Name": "Widget", "OrderQty": 15 },
        ])
    );
}

#[tokio::test]
async fn test_region_product_with_region_filter() {
    let (status, json) =
        get_json(setup(), "/charts/region-product?regions=United%20States").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json.as_array().unwrap().len(), 1);
    assert_eq!(json[0]["CountryRegion"], "United States");
    assert_eq!(json[0]["OrderQty"], 15);
}

#[tokio::test]
async fn test_empty_selection_matches_nothing() {
    let (status, json) = get_json(setup(), "/charts/region-product?regions=").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json, serde_json::json!([]));
}

#[tokio::test]
async fn test_time_chart_buckets_by_month() {
    let (status, json) =
        get_json(setup(), "/charts/time?start=2023-01-01&end=2023-12-31").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        json,
        serde_json::json!([
            { "YearMonth": "2023-01", "Vendas": 15 },
            { "YearMonth": "2023-02", "Vendas": 3 },
        ])
    );
}

#[tokio::test]
async fn test_inverted_window_is_empty_not_an_error() {
    let (status, json) =
        get_json(setup(), "/charts/time?start=2023-12-31&end=2023-01-01").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json, serde_json::json!([]));
}

#[tokio::test]
async fn test_malformed_date_is_a_bad_request() {
    let (status, json) = get_json(setup(), "/charts/time?start=garbage&end=2023-12-31").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(json["error"].as_str().unwrap().contains("start"));
}

#[tokio::test]
async fn test_metrics_endpoint_renders() {
    let app = setup();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/metrics")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}
