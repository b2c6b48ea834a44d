//! Chart dataset and filter endpoints.

use std::collections::HashSet;
use std::sync::Arc;

use analytics::{
    RegionProductRow, SalesTable, TimeBucketRow, summarize_by_region_product, summarize_by_time,
};
use axum::Json;
use axum::extract::{Query, State};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::ApiError;

/// Shared application state accessible from all handlers.
pub struct AppState {
    /// Immutable snapshot of the extracted sales table for this session.
    pub sales: Arc<SalesTable>,
}

// -- Request types --

#[derive(Deserialize)]
pub struct RegionProductParams {
    /// Comma-separated region filter. An omitted parameter means no filter;
    /// a present-but-empty one is an empty selection and matches nothing.
    pub regions: Option<String>,
    /// Comma-separated product filter, same convention.
    pub products: Option<String>,
}

#[derive(Deserialize)]
pub struct TimeWindowParams {
    /// Inclusive window start, `YYYY-MM-DD`.
    pub start: String,
    /// Inclusive window end, `YYYY-MM-DD`.
    pub end: String,
}

// -- Response types --

#[derive(Serialize)]
pub struct FiltersResponse {
    pub regions: Vec<String>,
    pub products: Vec<String>,
}

fn parse_selection(param: Option<&str>) -> Option<HashSet<String>> {
    param.map(|raw| {
        raw.split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(String::from)
            .collect()
    })
}

fn parse_date(field: &str, value: &str) -> Result<NaiveDate, ApiError> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map_err(|e| ApiError::BadRequest(format!("Invalid {field} date {value:?}: {e}")))
}

// -- Handlers --

/// GET /filters — distinct filter values of the loaded table.
#[tracing::instrument(skip(state))]
pub async fn filters(State(state): State<Arc<AppState>>) -> Json<FiltersResponse> {
    Json(FiltersResponse {
        regions: state.sales.distinct_regions(),
        products: state.sales.distinct_products(),
    })
}

/// GET /charts/region-product — quantity summed per (region, product).
#[tracing::instrument(skip(state, params))]
pub async fn region_product(
    State(state): State<Arc<AppState>>,
    Query(params): Query<RegionProductParams>,
) -> Json<Vec<RegionProductRow>> {
    let regions = parse_selection(params.regions.as_deref());
    let products = parse_selection(params.products.as_deref());

    Json(summarize_by_region_product(
        &state.sales,
        regions.as_ref(),
        products.as_ref(),
    ))
}

/// GET /charts/time — quantity summed per year-month over an inclusive window.
#[tracing::instrument(skip(state, params))]
pub async fn time(
    State(state): State<Arc<AppState>>,
    Query(params): Query<TimeWindowParams>,
) -> Result<Json<Vec<TimeBucketRow>>, ApiError> {
    let start = parse_date("start", &params.start)?;
    let end = parse_date("end", &params.end)?;

    Ok(Json(summarize_by_time(&state.sales, start, end)))
}
