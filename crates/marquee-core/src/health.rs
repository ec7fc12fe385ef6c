use axum::http::StatusCode;

/// Handler for `GET /healthz`. Liveness only; readiness is service-specific.
pub async fn healthz() -> StatusCode {
    StatusCode::OK
}
