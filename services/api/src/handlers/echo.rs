//! Placeholder endpoints that echo the request back, plus the 405 fallback.

use std::collections::BTreeMap;

use axum::{
    Json,
    body::Bytes,
    extract::{Query, State, rejection::QueryRejection},
    http::{HeaderMap, header::AUTHORIZATION},
};
use serde::Serialize;
use serde_json::Value;

use marquee_auth_types::identity::Identity;

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Serialize)]
pub struct EchoResponse {
    pub status: u16,
    pub message: &'static str,
    pub headers: BTreeMap<String, String>,
    pub query: BTreeMap<String, String>,
    /// Server's `UNIQUE_KEY`, if configured.
    pub key: Option<String>,
    pub body: Value,
}

type EchoQuery = BTreeMap<String, String>;

fn echo(
    state: &AppState,
    message: &'static str,
    headers: &HeaderMap,
    query: BTreeMap<String, String>,
    body: &Bytes,
) -> EchoResponse {
    let headers = headers
        .iter()
        .map(|(name, value)| {
            let value = if *name == AUTHORIZATION {
                "[redacted]".to_owned()
            } else {
                String::from_utf8_lossy(value.as_bytes()).into_owned()
            };
            (name.as_str().to_owned(), value)
        })
        .collect();
    let body = if body.is_empty() {
        Value::String("No body".to_owned())
    } else {
        serde_json::from_slice(body)
            .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(body).into_owned()))
    };
    EchoResponse {
        status: 200,
        message,
        headers,
        query,
        key: state.unique_key.clone(),
        body,
    }
}

// ── PUT /movies ──────────────────────────────────────────────────────────────

pub async fn update_movies(
    _identity: Identity,
    State(state): State<AppState>,
    headers: HeaderMap,
    query: Result<Query<EchoQuery>, QueryRejection>,
    body: Bytes,
) -> Result<Json<EchoResponse>, ApiError> {
    let Query(query) = query.map_err(|e| ApiError::Validation(e.body_text()))?;
    Ok(Json(echo(&state, "movie updated", &headers, query, &body)))
}

// ── DELETE /movies ───────────────────────────────────────────────────────────

pub async fn delete_movies(
    _identity: Identity,
    State(state): State<AppState>,
    headers: HeaderMap,
    query: Result<Query<EchoQuery>, QueryRejection>,
    body: Bytes,
) -> Result<Json<EchoResponse>, ApiError> {
    let Query(query) = query.map_err(|e| ApiError::Validation(e.body_text()))?;
    Ok(Json(echo(&state, "movie deleted", &headers, query, &body)))
}

// ── POST /movies/title/{title} ───────────────────────────────────────────────

pub async fn post_movie_title(
    _identity: Identity,
    State(state): State<AppState>,
    headers: HeaderMap,
    query: Result<Query<EchoQuery>, QueryRejection>,
    body: Bytes,
) -> Result<Json<EchoResponse>, ApiError> {
    let Query(query) = query.map_err(|e| ApiError::Validation(e.body_text()))?;
    Ok(Json(echo(&state, "movie with title posted", &headers, query, &body)))
}

/// Fallback for verbs a movie route does not handle.
pub async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}
