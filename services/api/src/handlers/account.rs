use axum::{Json, extract::State, extract::rejection::JsonRejection};
use serde::{Deserialize, Serialize};

use crate::error::ApiError;
use crate::state::AppState;
use crate::usecase::account::{SigninInput, SigninUseCase, SignupInput, SignupUseCase};

#[derive(Deserialize)]
pub struct CredentialsRequest {
    pub name: Option<String>,
    #[serde(default, deserialize_with = "marquee_core::serde::non_blank")]
    pub username: Option<String>,
    #[serde(default, deserialize_with = "marquee_core::serde::non_blank")]
    pub password: Option<String>,
}

// ── POST /signup ─────────────────────────────────────────────────────────────

#[derive(Serialize)]
pub struct SignupResponse {
    pub success: bool,
    pub msg: &'static str,
}

pub async fn signup(
    State(state): State<AppState>,
    body: Result<Json<CredentialsRequest>, JsonRejection>,
) -> Result<Json<SignupResponse>, ApiError> {
    let Json(body) = body.map_err(|_| ApiError::MissingCredentials)?;
    let usecase = SignupUseCase {
        users: state.user_repo(),
        bcrypt_cost: state.bcrypt_cost,
    };
    let user = usecase
        .execute(SignupInput {
            name: body.name,
            username: body.username,
            password: body.password,
        })
        .await?;
    tracing::info!(user_id = %user.id, username = %user.username, "user signed up");
    Ok(Json(SignupResponse {
        success: true,
        msg: "Successfully created new user.",
    }))
}

// ── POST /signin ─────────────────────────────────────────────────────────────

#[derive(Serialize)]
pub struct SigninResponse {
    pub success: bool,
    pub token: String,
}

pub async fn signin(
    State(state): State<AppState>,
    body: Result<Json<CredentialsRequest>, JsonRejection>,
) -> Result<Json<SigninResponse>, ApiError> {
    let Json(body) = body.map_err(|_| ApiError::AuthenticationFailed)?;
    let usecase = SigninUseCase {
        users: state.user_repo(),
        issuer: state.token_issuer(),
    };
    let out = usecase
        .execute(SigninInput {
            username: body.username,
            password: body.password,
        })
        .await?;
    tracing::info!(user_id = %out.user_id, "user signed in");
    Ok(Json(SigninResponse {
        success: true,
        token: out.token,
    }))
}
