//! Error types for the lookup server
//!
//! Provides unified error handling using thiserror.
//!
//! Two layers: `FetchError` describes why a single upstream call failed and is
//! absorbed at the source-client boundary (converted into a `FetchOutcome`,
//! never propagated past it). `LookupError` is the request-level failure type
//! the HTTP layer maps to status codes.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

// == Fetch Error Enum ==
/// Failure of a single upstream call. Non-fatal; source clients convert
/// these into `FetchOutcome::Error` and the aggregator substitutes defaults.
#[derive(Error, Debug, Clone)]
pub enum FetchError {
    /// Network-level failure, including connect errors and timeouts
    #[error("transport error: {0}")]
    Transport(String),

    /// Upstream answered with a non-success status code
    #[error("upstream returned status {0}")]
    Upstream(u16),

    /// Upstream answered 2xx but the body could not be decoded
    #[error("malformed upstream body: {0}")]
    Malformed(String),
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            FetchError::Malformed(err.to_string())
        } else if let Some(status) = err.status() {
            FetchError::Upstream(status.as_u16())
        } else {
            // connect errors, timeouts, body read failures
            FetchError::Transport(err.to_string())
        }
    }
}

// == Lookup Error Enum ==
/// Request-level error for the lookup server.
///
/// Upstream failures never surface here; a lookup fails only when the whole
/// call exceeds its outer deadline or assembly itself faults.
#[derive(Error, Debug)]
pub enum LookupError {
    /// The overall lookup exceeded its deadline
    #[error("Lookup timed out")]
    Timeout,

    /// Internal fault while assembling the result
    #[error("Aggregation failed: {0}")]
    Aggregation(String),
}

// == IntoResponse Implementation ==
impl IntoResponse for LookupError {
    fn into_response(self) -> Response {
        let status = match &self {
            LookupError::Timeout => StatusCode::GATEWAY_TIMEOUT,
            LookupError::Aggregation(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = Json(json!({
            "error": self.to_string()
        }));

        (status, body).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the lookup server.
pub type Result<T> = std::result::Result<T, LookupError>;
