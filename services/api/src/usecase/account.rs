use chrono::Utc;
use uuid::Uuid;

use crate::domain::repository::UserRepository;
use crate::domain::types::User;
use crate::error::ApiError;
use crate::infra::password::{hash_password, verify_password};
use crate::usecase::token::TokenIssuer;

// ── Signup ───────────────────────────────────────────────────────────────────

pub struct SignupInput {
    pub name: Option<String>,
    pub username: Option<String>,
    pub password: Option<String>,
}

pub struct SignupUseCase<U: UserRepository> {
    pub users: U,
    pub bcrypt_cost: u32,
}

impl<U: UserRepository> SignupUseCase<U> {
    pub async fn execute(&self, input: SignupInput) -> Result<User, ApiError> {
        let (Some(username), Some(password)) = (input.username, input.password) else {
            return Err(ApiError::MissingCredentials);
        };
        let user = User {
            id: Uuid::now_v7(),
            name: input.name,
            username,
            password_hash: hash_password(password, self.bcrypt_cost).await?,
            created_at: Utc::now(),
        };
        self.users.create(&user).await?;
        Ok(user)
    }
}

// ── Signin ───────────────────────────────────────────────────────────────────

pub struct SigninInput {
    pub username: Option<String>,
    pub password: Option<String>,
}

#[derive(Debug)]
pub struct SigninOutput {
    pub user_id: Uuid,
    pub username: String,
    /// Scheme-prefixed token, e.g. `"JWT eyJ..."`.
    pub token: String,
}

pub struct SigninUseCase<U: UserRepository> {
    pub users: U,
    pub issuer: TokenIssuer,
}

impl<U: UserRepository> SigninUseCase<U> {
    /// Unknown usernames and wrong passwords fail identically.
    pub async fn execute(&self, input: SigninInput) -> Result<SigninOutput, ApiError> {
        let (Some(username), Some(password)) = (input.username, input.password) else {
            return Err(ApiError::AuthenticationFailed);
        };
        let user = self
            .users
            .find_by_username(&username)
            .await?
            .ok_or(ApiError::AuthenticationFailed)?;

        if !verify_password(&user, password).await? {
            return Err(ApiError::AuthenticationFailed);
        }

        let token = self.issuer.issue(user.id, &user.username)?;
        Ok(SigninOutput {
            user_id: user.id,
            username: user.username,
            token,
        })
    }
}
