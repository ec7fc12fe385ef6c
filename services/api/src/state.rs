use axum::extract::FromRef;
use sea_orm::DatabaseConnection;

use marquee_auth_types::identity::TokenSecret;

use crate::infra::db::{DbMovieRepository, DbReviewRepository, DbUserRepository};
use crate::usecase::token::TokenIssuer;

/// Shared application state passed to every handler via axum `State`.
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub token_secret: TokenSecret,
    pub token_ttl_secs: Option<u64>,
    pub bcrypt_cost: u32,
    pub unique_key: Option<String>,
}

impl AppState {
    pub fn user_repo(&self) -> DbUserRepository {
        DbUserRepository {
            db: self.db.clone(),
        }
    }

    pub fn movie_repo(&self) -> DbMovieRepository {
        DbMovieRepository {
            db: self.db.clone(),
        }
    }

    pub fn review_repo(&self) -> DbReviewRepository {
        DbReviewRepository {
            db: self.db.clone(),
        }
    }

    pub fn token_issuer(&self) -> TokenIssuer {
        TokenIssuer {
            secret: self.token_secret.clone(),
            ttl_secs: self.token_ttl_secs,
        }
    }
}

impl FromRef<AppState> for TokenSecret {
    fn from_ref(state: &AppState) -> Self {
        state.token_secret.clone()
    }
}
