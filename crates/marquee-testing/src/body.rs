//! Response body helpers.

use axum::body::{Body, to_bytes};
use axum::response::Response;
use serde_json::Value;

/// Collect a response body and parse it as JSON.
///
/// Panics on read errors or invalid JSON.
pub async fn json_body(response: Response<Body>) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap_or_else(|e| panic!("failed to read body: {e}"));
    serde_json::from_slice(&bytes)
        .unwrap_or_else(|e| panic!("response is not JSON: {e}"))
}
