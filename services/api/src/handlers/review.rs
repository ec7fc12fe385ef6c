use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use marquee_auth_types::identity::Identity;

use crate::domain::types::Review;
use crate::error::ApiError;
use crate::state::AppState;
use crate::usecase::review::{CreateReviewInput, CreateReviewUseCase, ListReviewsUseCase};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewResponse {
    pub id: Uuid,
    pub movie_id: Uuid,
    pub username: String,
    pub review: String,
    pub rating: f64,
    #[serde(serialize_with = "marquee_core::serde::to_rfc3339_ms")]
    pub created_at: DateTime<Utc>,
}

impl From<Review> for ReviewResponse {
    fn from(r: Review) -> Self {
        Self {
            id: r.id,
            movie_id: r.movie_id,
            username: r.username,
            review: r.review,
            rating: r.rating,
            created_at: r.created_at,
        }
    }
}

// ── GET /reviews ─────────────────────────────────────────────────────────────

#[derive(Serialize)]
pub struct ReviewsResponse {
    pub success: bool,
    pub reviews: Vec<ReviewResponse>,
}

pub async fn list_reviews(
    State(state): State<AppState>,
) -> Result<Json<ReviewsResponse>, ApiError> {
    let usecase = ListReviewsUseCase {
        reviews: state.review_repo(),
    };
    let reviews = usecase.execute().await?;
    Ok(Json(ReviewsResponse {
        success: true,
        reviews: reviews.into_iter().map(ReviewResponse::from).collect(),
    }))
}

// ── POST /reviews ────────────────────────────────────────────────────────────

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateReviewRequest {
    pub movie_id: Option<String>,
    #[serde(default, deserialize_with = "marquee_core::serde::non_blank")]
    pub review: Option<String>,
    pub rating: Option<f64>,
}

#[derive(Serialize)]
pub struct CreateReviewResponse {
    pub message: &'static str,
    pub review: ReviewResponse,
}

pub async fn create_review(
    identity: Identity,
    State(state): State<AppState>,
    body: Result<Json<CreateReviewRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<CreateReviewResponse>), ApiError> {
    let Json(body) = body.map_err(|e| ApiError::Validation(e.body_text()))?;
    let usecase = CreateReviewUseCase {
        movies: state.movie_repo(),
        reviews: state.review_repo(),
    };
    let review = usecase
        .execute(
            &identity.username,
            CreateReviewInput {
                movie_id: body.movie_id,
                review: body.review,
                rating: body.rating,
            },
        )
        .await?;
    tracing::info!(
        review_id = %review.id,
        movie_id = %review.movie_id,
        user_id = %identity.user_id,
        "review created"
    );
    Ok((
        StatusCode::CREATED,
        Json(CreateReviewResponse {
            message: "Review created!",
            review: review.into(),
        }),
    ))
}
