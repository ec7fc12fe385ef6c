use uuid::Uuid;

use marquee_auth_types::identity::TokenSecret;
use marquee_auth_types::token::{TOKEN_SCHEME, sign_token};

use crate::error::ApiError;

/// Issues tokens with the server-side secret. Requests are checked by the
/// `Identity` extractor.
#[derive(Clone)]
pub struct TokenIssuer {
    pub secret: TokenSecret,
    /// `None` issues tokens without an `exp` claim.
    pub ttl_secs: Option<u64>,
}

impl TokenIssuer {
    /// Sign an identity token, returned with its scheme prefix (`"JWT <token>"`).
    pub fn issue(&self, user_id: Uuid, username: &str) -> Result<String, ApiError> {
        let raw = sign_token(user_id, username, self.ttl_secs, &self.secret.0)
            .map_err(|e| ApiError::Internal(e.into()))?;
        Ok(format!("{TOKEN_SCHEME} {raw}"))
    }
}
