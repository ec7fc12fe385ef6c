//! Signed-token helpers for integration tests.
//!
//! Protected routes expect `Authorization: JWT <token>`. `MockAuth` signs a real token
//! with the test secret so requests pass the same extractor production traffic does.

use http::{HeaderName, HeaderValue, header::AUTHORIZATION};
use uuid::Uuid;

use marquee_auth_types::token::{TOKEN_SCHEME, sign_token};

/// Shared HMAC secret for tests that build an `AppState`.
pub const TEST_SECRET: &str = "marquee-test-secret";

/// Identity to sign into test requests.
pub struct MockAuth {
    pub user_id: Uuid,
    pub username: String,
}

impl MockAuth {
    pub fn new(user_id: Uuid, username: impl Into<String>) -> Self {
        Self {
            user_id,
            username: username.into(),
        }
    }

    /// A fresh caller with a random id.
    pub fn any() -> Self {
        Self::new(Uuid::now_v7(), "tester")
    }

    /// Token value as returned by signin, scheme included.
    pub fn token(&self) -> String {
        let raw = sign_token(self.user_id, &self.username, None, TEST_SECRET)
            .unwrap_or_else(|e| panic!("failed to sign test token: {e}"));
        format!("{TOKEN_SCHEME} {raw}")
    }

    /// `Authorization` header pair for `Request::builder().header(..)`.
    pub fn header(&self) -> (HeaderName, HeaderValue) {
        let value = HeaderValue::from_str(&self.token())
            .unwrap_or_else(|e| panic!("invalid header value: {e}"));
        (AUTHORIZATION, value)
    }
}
