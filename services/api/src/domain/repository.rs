#![allow(async_fn_in_trait)]

use uuid::Uuid;

use crate::domain::types::{Movie, MovieChanges, Review, User};
use crate::error::ApiError;

/// Credential store.
pub trait UserRepository: Send + Sync {
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, ApiError>;

    /// Insert a new user. Fails with [`ApiError::UsernameTaken`] when the username exists.
    async fn create(&self, user: &User) -> Result<(), ApiError>;
}

pub trait MovieRepository: Send + Sync {
    /// All movies in creation order. With `complete_only`, movies missing a release
    /// date, genre or actors are skipped.
    async fn list(&self, complete_only: bool) -> Result<Vec<Movie>, ApiError>;

    /// All movies in creation order, each with its reviews.
    async fn list_with_reviews(&self) -> Result<Vec<(Movie, Vec<Review>)>, ApiError>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Movie>, ApiError>;

    async fn find_by_id_with_reviews(
        &self,
        id: Uuid,
    ) -> Result<Option<(Movie, Vec<Review>)>, ApiError>;

    /// Earliest-created movie with exactly this title.
    async fn find_by_title(&self, title: &str) -> Result<Option<Movie>, ApiError>;

    async fn create(&self, movie: &Movie) -> Result<(), ApiError>;

    /// Apply `changes` to the movie found by title. Returns the updated movie, or
    /// `None` if no movie has that title.
    async fn update_by_title(
        &self,
        title: &str,
        changes: &MovieChanges,
    ) -> Result<Option<Movie>, ApiError>;

    /// Delete the movie found by title. Returns `true` if a movie was deleted.
    async fn delete_by_title(&self, title: &str) -> Result<bool, ApiError>;

    async fn exists(&self, id: Uuid) -> Result<bool, ApiError>;
}

pub trait ReviewRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<Review>, ApiError>;

    async fn create(&self, review: &Review) -> Result<(), ApiError>;
}
