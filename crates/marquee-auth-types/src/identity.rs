//! `Authorization` header extractor for protected routes.

use std::sync::Arc;

use axum::Json;
use axum::extract::{FromRef, FromRequestParts};
use axum::response::{IntoResponse, Response};
use http::StatusCode;
use http::header::AUTHORIZATION;
use http::request::Parts;
use uuid::Uuid;

use crate::token::{TOKEN_SCHEME, validate_token};

/// HMAC secret used to verify tokens. Exposed to the extractor through `FromRef`.
#[derive(Clone)]
pub struct TokenSecret(pub Arc<str>);

impl TokenSecret {
    pub fn new(secret: impl Into<Arc<str>>) -> Self {
        Self(secret.into())
    }
}

/// Authenticated caller, recovered from `Authorization: JWT <token>`
/// (or `Bearer <token>`).
#[derive(Debug, Clone)]
pub struct Identity {
    pub user_id: Uuid,
    pub username: String,
}

/// Rejection for missing, malformed, or invalid tokens. Always 401.
#[derive(Debug)]
pub struct Unauthorized;

impl IntoResponse for Unauthorized {
    fn into_response(self) -> Response {
        let body = serde_json::json!({
            "success": false,
            "kind": "INVALID_TOKEN",
            "message": "unauthorized",
        });
        (StatusCode::UNAUTHORIZED, Json(body)).into_response()
    }
}

/// Split `"<scheme> <token>"` and return the token when the scheme is `JWT` or `Bearer`
/// (case-insensitive).
pub fn strip_scheme(value: &str) -> Option<&str> {
    let (scheme, token) = value.trim().split_once(' ')?;
    let token = token.trim();
    let accepted =
        scheme.eq_ignore_ascii_case(TOKEN_SCHEME) || scheme.eq_ignore_ascii_case("bearer");
    (accepted && !token.is_empty()).then_some(token)
}

impl<S> FromRequestParts<S> for Identity
where
    S: Send + Sync,
    TokenSecret: FromRef<S>,
{
    type Rejection = Unauthorized;

    // Validate synchronously and hand back a 'static future; `async fn` here would
    // capture the `parts` lifetime.
    fn from_request_parts(
        parts: &mut Parts,
        state: &S,
    ) -> impl std::future::Future<Output = Result<Self, Self::Rejection>> + Send {
        let TokenSecret(secret) = TokenSecret::from_ref(state);

        let result = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .and_then(strip_scheme)
            .ok_or(Unauthorized)
            .and_then(|token| {
                validate_token(token, &secret).map_err(|e| {
                    tracing::debug!(error = %e, "rejected bearer token");
                    Unauthorized
                })
            })
            .map(|info| Self {
                user_id: info.user_id,
                username: info.username,
            });

        async move { result }
    }
}
