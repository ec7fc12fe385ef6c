use chrono::Utc;
use uuid::Uuid;

use crate::domain::repository::{MovieRepository, ReviewRepository};
use crate::domain::types::{MAX_RATING, MIN_RATING, Review, is_valid_rating};
use crate::error::ApiError;

// ── ListReviews ──────────────────────────────────────────────────────────────

pub struct ListReviewsUseCase<R: ReviewRepository> {
    pub reviews: R,
}

impl<R: ReviewRepository> ListReviewsUseCase<R> {
    pub async fn execute(&self) -> Result<Vec<Review>, ApiError> {
        let reviews = self.reviews.list().await?;
        if reviews.is_empty() {
            return Err(ApiError::NoReviewsFound);
        }
        Ok(reviews)
    }
}

// ── CreateReview ─────────────────────────────────────────────────────────────

pub struct CreateReviewInput {
    pub movie_id: Option<String>,
    pub review: Option<String>,
    pub rating: Option<f64>,
}

pub struct CreateReviewUseCase<M: MovieRepository, R: ReviewRepository> {
    pub movies: M,
    pub reviews: R,
}

impl<M: MovieRepository, R: ReviewRepository> CreateReviewUseCase<M, R> {
    /// Missing or out-of-range fields fail with 400 before the movie is looked up.
    /// The movie must exist at the time of the check; nothing stops a concurrent
    /// delete afterwards.
    pub async fn execute(
        &self,
        username: &str,
        input: CreateReviewInput,
    ) -> Result<Review, ApiError> {
        let movie_id = input
            .movie_id
            .ok_or_else(|| ApiError::Validation("movieId is required".into()))?;
        let text = input
            .review
            .ok_or_else(|| ApiError::Validation("review is required".into()))?;
        let rating = input
            .rating
            .ok_or_else(|| ApiError::Validation("rating is required".into()))?;
        if !is_valid_rating(rating) {
            return Err(ApiError::Validation(format!(
                "rating must be between {MIN_RATING} and {MAX_RATING}"
            )));
        }

        let movie_id = movie_id
            .trim()
            .parse::<Uuid>()
            .map_err(|_| ApiError::MovieNotFound)?;
        if !self.movies.exists(movie_id).await? {
            return Err(ApiError::MovieNotFound);
        }

        let review = Review {
            id: Uuid::now_v7(),
            movie_id,
            username: username.to_owned(),
            review: text,
            rating,
            created_at: Utc::now(),
        };
        self.reviews.create(&review).await?;
        Ok(review)
    }
}
