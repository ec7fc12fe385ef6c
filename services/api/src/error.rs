use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// API error variants. Each maps to one status code and a stable `kind`.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Please include both username and password to signup.")]
    MissingCredentials,
    #[error("A user with that username already exists.")]
    UsernameTaken,
    #[error("Authentication failed.")]
    AuthenticationFailed,
    #[error("{0}")]
    Validation(String),
    #[error("Movie not found")]
    MovieNotFound,
    #[error("No movies found.")]
    NoMoviesFound,
    #[error("No reviews found.")]
    NoReviewsFound,
    #[error("HTTP method not supported.")]
    MethodNotAllowed,
    #[error("Internal server error")]
    Internal(#[from] anyhow::Error),
}

impl ApiError {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::MissingCredentials => "MISSING_CREDENTIALS",
            Self::UsernameTaken => "USERNAME_TAKEN",
            Self::AuthenticationFailed => "AUTHENTICATION_FAILED",
            Self::Validation(_) => "VALIDATION",
            Self::MovieNotFound => "MOVIE_NOT_FOUND",
            Self::NoMoviesFound => "NO_MOVIES_FOUND",
            Self::NoReviewsFound => "NO_REVIEWS_FOUND",
            Self::MethodNotAllowed => "METHOD_NOT_ALLOWED",
            Self::Internal(_) => "INTERNAL",
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            // Signup failures are reported in-band with a 200, as existing clients expect.
            Self::MissingCredentials | Self::UsernameTaken => StatusCode::OK,
            Self::AuthenticationFailed => StatusCode::UNAUTHORIZED,
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::MovieNotFound | Self::NoMoviesFound | Self::NoReviewsFound => {
                StatusCode::NOT_FOUND
            }
            Self::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        // Only 500s are logged here; TraceLayer already records every request's status.
        if let Self::Internal(ref e) = self {
            tracing::error!(error = %format!("{e:#}"), kind = "INTERNAL", "internal error");
        }
        let body = serde_json::json!({
            "success": false,
            "kind": self.kind(),
            "message": self.to_string(),
        });
        (self.status(), axum::Json(body)).into_response()
    }
}
