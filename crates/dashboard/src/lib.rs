//! HTTP serving boundary for the sales reporting pipeline.
//!
//! Exposes the two chart datasets, the filter defaults, health, and
//! Prometheus metrics over a small axum router, with structured logging
//! (tracing). The sales table is extracted once at startup and served as an
//! immutable snapshot; each request runs one pure aggregation over it.

pub mod config;
pub mod error;
pub mod routes;

use std::sync::Arc;

use analytics::SalesTable;
use axum::Router;
use axum::routing::get;
use metrics_exporter_prometheus::PrometheusHandle;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use routes::charts::AppState;

/// Creates the Axum application router with all routes and shared state.
pub fn create_app(state: Arc<AppState>, metrics_handle: PrometheusHandle) -> Router {
    let metrics_router = Router::new()
        .route("/metrics", get(routes::metrics::get))
        .with_state(metrics_handle);

    Router::new()
        .route("/health", get(routes::health::check))
        .route("/filters", get(routes::charts::filters))
        .route("/charts/region-product", get(routes::charts::region_product))
        .route("/charts/time", get(routes::charts::time))
        .with_state(state)
        .merge(metrics_router)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
}

/// Creates application state around an extracted sales table.
pub fn create_state(sales: SalesTable) -> Arc<AppState> {
    Arc::new(AppState {
        sales: Arc::new(sales),
    })
}
