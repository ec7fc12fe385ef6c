//! JWT claims and validation.

use std::time::{SystemTime, UNIX_EPOCH};

use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Scheme prefix the API puts in front of issued tokens (`"JWT <token>"`).
pub const TOKEN_SCHEME: &str = "JWT";

/// User identity recovered from a validated token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenInfo {
    pub user_id: Uuid,
    pub username: String,
    pub exp: Option<u64>,
}

/// Errors returned by [`validate_token`].
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("invalid signature")]
    InvalidSignature,
    #[error("token expired")]
    Expired,
    #[error("malformed token")]
    Malformed,
    #[error("failed to sign token")]
    Signing(#[source] jsonwebtoken::errors::Error),
}

/// JWT claims payload.
///
/// | Field | JWT claim | Meaning |
/// |-------|-----------|---------|
/// | `id` | custom | user id (UUID string) |
/// | `username` | custom | login name at issue time |
/// | `exp` | `exp` | optional expiry, seconds since epoch |
///
/// Tokens carry no `exp` unless the issuer is configured with a lifetime.
#[derive(Debug, Serialize, Deserialize)]
pub struct JwtClaims {
    pub id: String,
    pub username: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exp: Option<u64>,
}

pub fn now_secs() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or_default()
}

/// Sign claims for `user_id`/`username` with HS256.
///
/// `ttl_secs` of `None` yields a token that never expires.
pub fn sign_token(
    user_id: Uuid,
    username: &str,
    ttl_secs: Option<u64>,
    secret: &str,
) -> Result<String, AuthError> {
    let claims = JwtClaims {
        id: user_id.to_string(),
        username: username.to_owned(),
        exp: ttl_secs.map(|ttl| now_secs() + ttl),
    };
    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(AuthError::Signing)
}

/// Validate a raw token (no scheme prefix) and return the identity it carries.
///
/// HS256 only. `exp` is checked when present but not required.
pub fn validate_token(token: &str, secret: &str) -> Result<TokenInfo, AuthError> {
    let mut validation = Validation::new(jsonwebtoken::Algorithm::HS256);
    validation.validate_exp = true;
    validation.required_spec_claims.clear();

    let data = decode::<JwtClaims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &validation,
    )
    .map_err(|e| match e.kind() {
        jsonwebtoken::errors::ErrorKind::ExpiredSignature => AuthError::Expired,
        jsonwebtoken::errors::ErrorKind::InvalidSignature => AuthError::InvalidSignature,
        _ => AuthError::Malformed,
    })?;

    let user_id = data
        .claims
        .id
        .parse::<Uuid>()
        .map_err(|_| AuthError::Malformed)?;
    Ok(TokenInfo {
        user_id,
        username: data.claims.username,
        exp: data.claims.exp,
    })
}
