use std::sync::{Arc, Mutex};

use chrono::{NaiveDate, Utc};
use sea_orm::DatabaseConnection;
use uuid::Uuid;

use marquee_api::domain::repository::{MovieRepository, ReviewRepository};
use marquee_api::domain::types::{Movie, MovieChanges, Review};
use marquee_api::error::ApiError;
use marquee_api::state::AppState;
use marquee_auth_types::identity::TokenSecret;
use marquee_testing::auth::TEST_SECRET;

// ── In-memory store shared by the mock repositories ──────────────────────────

#[derive(Clone, Default)]
pub struct MockStore {
    pub movies: Arc<Mutex<Vec<Movie>>>,
    pub reviews: Arc<Mutex<Vec<Review>>>,
}

impl MockStore {
    pub fn with_movies(movies: Vec<Movie>) -> Self {
        let store = Self::default();
        *store.movies.lock().unwrap() = movies;
        store
    }

    pub fn movie_repo(&self) -> MockMovieRepo {
        MockMovieRepo {
            store: self.clone(),
        }
    }

    pub fn review_repo(&self) -> MockReviewRepo {
        MockReviewRepo {
            store: self.clone(),
        }
    }

    pub fn add_review(&self, movie_id: Uuid, rating: f64) {
        self.reviews.lock().unwrap().push(test_review(movie_id, rating));
    }

    fn reviews_for(&self, movie_id: Uuid) -> Vec<Review> {
        self.reviews
            .lock()
            .unwrap()
            .iter()
            .filter(|r| r.movie_id == movie_id)
            .cloned()
            .collect()
    }
}

// ── MockMovieRepo ────────────────────────────────────────────────────────────

pub struct MockMovieRepo {
    pub store: MockStore,
}

impl MovieRepository for MockMovieRepo {
    async fn list(&self, complete_only: bool) -> Result<Vec<Movie>, ApiError> {
        Ok(self
            .store
            .movies
            .lock()
            .unwrap()
            .iter()
            .filter(|m| !complete_only || m.is_complete())
            .cloned()
            .collect())
    }

    async fn list_with_reviews(&self) -> Result<Vec<(Movie, Vec<Review>)>, ApiError> {
        let movies = self.store.movies.lock().unwrap().clone();
        Ok(movies
            .into_iter()
            .map(|m| {
                let reviews = self.store.reviews_for(m.id);
                (m, reviews)
            })
            .collect())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Movie>, ApiError> {
        Ok(self
            .store
            .movies
            .lock()
            .unwrap()
            .iter()
            .find(|m| m.id == id)
            .cloned())
    }

    async fn find_by_id_with_reviews(
        &self,
        id: Uuid,
    ) -> Result<Option<(Movie, Vec<Review>)>, ApiError> {
        let movie = self.find_by_id(id).await?;
        Ok(movie.map(|m| {
            let reviews = self.store.reviews_for(m.id);
            (m, reviews)
        }))
    }

    async fn find_by_title(&self, title: &str) -> Result<Option<Movie>, ApiError> {
        Ok(self
            .store
            .movies
            .lock()
            .unwrap()
            .iter()
            .find(|m| m.title == title)
            .cloned())
    }

    async fn create(&self, movie: &Movie) -> Result<(), ApiError> {
        self.store.movies.lock().unwrap().push(movie.clone());
        Ok(())
    }

    async fn update_by_title(
        &self,
        title: &str,
        changes: &MovieChanges,
    ) -> Result<Option<Movie>, ApiError> {
        let mut movies = self.store.movies.lock().unwrap();
        Ok(movies.iter_mut().find(|m| m.title == title).map(|m| {
            changes.apply(m);
            m.clone()
        }))
    }

    async fn delete_by_title(&self, title: &str) -> Result<bool, ApiError> {
        let mut movies = self.store.movies.lock().unwrap();
        match movies.iter().position(|m| m.title == title) {
            Some(idx) => {
                movies.remove(idx);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn exists(&self, id: Uuid) -> Result<bool, ApiError> {
        Ok(self.store.movies.lock().unwrap().iter().any(|m| m.id == id))
    }
}

// ── MockReviewRepo ───────────────────────────────────────────────────────────

pub struct MockReviewRepo {
    pub store: MockStore,
}

impl ReviewRepository for MockReviewRepo {
    async fn list(&self) -> Result<Vec<Review>, ApiError> {
        Ok(self.store.reviews.lock().unwrap().clone())
    }

    async fn create(&self, review: &Review) -> Result<(), ApiError> {
        self.store.reviews.lock().unwrap().push(review.clone());
        Ok(())
    }
}

// ── Test fixture helpers ─────────────────────────────────────────────────────

pub fn test_movie(title: &str) -> Movie {
    Movie {
        id: Uuid::now_v7(),
        title: title.to_owned(),
        release_date: NaiveDate::from_ymd_opt(1995, 12, 15),
        genre: Some("Crime".to_owned()),
        actors: vec!["Al Pacino".to_owned(), "Robert De Niro".to_owned()],
        created_at: Utc::now(),
    }
}

pub fn test_review(movie_id: Uuid, rating: f64) -> Review {
    Review {
        id: Uuid::now_v7(),
        movie_id,
        username: "critic".to_owned(),
        review: "worth a watch".to_owned(),
        rating,
        created_at: Utc::now(),
    }
}

/// State whose database is never reachable. Only routes that answer before
/// touching storage can be exercised with it.
pub fn offline_state() -> AppState {
    AppState {
        db: DatabaseConnection::Disconnected,
        token_secret: TokenSecret::new(TEST_SECRET),
        token_ttl_secs: None,
        bcrypt_cost: 4,
        unique_key: Some("test-unique-key".to_owned()),
    }
}
