//! API error types with HTTP response mapping.

use analytics::AnalyticsError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use sales_store::StoreError;

/// API-level error type that maps to HTTP responses.
///
/// This is the outermost boundary of the pipeline: every error below it
/// bubbles up unchanged and is turned into a JSON failure response here.
#[derive(Debug)]
pub enum ApiError {
    /// Bad request from the client.
    BadRequest(String),
    /// Pipeline (extraction/aggregation) error.
    Analytics(AnalyticsError),
    /// Internal server error.
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::Analytics(err) => analytics_error_to_response(err),
            ApiError::Internal(msg) => {
                tracing::error!(error = %msg, "internal server error");
                (StatusCode::INTERNAL_SERVER_ERROR, msg)
            }
        };

        let body = serde_json::json!({ "error": message });
        (status, axum::Json(body)).into_response()
    }
}

fn analytics_error_to_response(err: AnalyticsError) -> (StatusCode, String) {
    match &err {
        AnalyticsError::Store(StoreError::QueryExecution(_)) => {
            tracing::error!(error = %err, "source database failure");
            (StatusCode::BAD_GATEWAY, err.to_string())
        }
        AnalyticsError::DateConversion { .. } => {
            tracing::error!(error = %err, "extraction failure");
            (StatusCode::INTERNAL_SERVER_ERROR, err.to_string())
        }
        AnalyticsError::Store(_) => (StatusCode::INTERNAL_SERVER_ERROR, err.to_string()),
    }
}

impl From<AnalyticsError> for ApiError {
    fn from(err: AnalyticsError) -> Self {
        ApiError::Analytics(err)
    }
}
