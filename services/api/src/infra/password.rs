//! bcrypt hashing, run on the blocking pool so request tasks are not stalled.

use anyhow::Context as _;

use crate::domain::types::User;
use crate::error::ApiError;

/// Hash `password` with a fresh salt at the given bcrypt cost.
pub async fn hash_password(password: String, cost: u32) -> Result<String, ApiError> {
    let hash = tokio::task::spawn_blocking(move || bcrypt::hash(password, cost))
        .await
        .context("join password hashing task")?
        .context("hash password")?;
    Ok(hash)
}

/// Compare `candidate` against the user's stored hash.
pub async fn verify_password(user: &User, candidate: String) -> Result<bool, ApiError> {
    let hash = user.password_hash.clone();
    let matched = tokio::task::spawn_blocking(move || bcrypt::verify(candidate, &hash))
        .await
        .context("join password verification task")?
        .context("verify password")?;
    Ok(matched)
}
