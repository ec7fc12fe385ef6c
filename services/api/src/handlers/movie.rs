use axum::{
    Json,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, QueryRejection},
    },
    http::StatusCode,
};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use marquee_auth_types::identity::Identity;

use crate::domain::types::{Movie, MovieChanges, RatedMovie};
use crate::error::ApiError;
use crate::handlers::review::ReviewResponse;
use crate::state::AppState;
use crate::usecase::movie::{
    CreateMovieInput, CreateMovieUseCase, DeleteMovieUseCase, GetMovieByTitleUseCase,
    GetMovieUseCase, ListMoviesInput, ListMoviesUseCase, MovieDetail, MovieListing,
    UpdateMovieUseCase,
};

// ── Response types ───────────────────────────────────────────────────────────

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MovieResponse {
    pub id: Uuid,
    pub title: String,
    pub release_date: Option<NaiveDate>,
    pub genre: Option<String>,
    pub actors: Vec<String>,
    #[serde(serialize_with = "marquee_core::serde::to_rfc3339_ms")]
    pub created_at: DateTime<Utc>,
}

impl From<Movie> for MovieResponse {
    fn from(m: Movie) -> Self {
        Self {
            id: m.id,
            title: m.title,
            release_date: m.release_date,
            genre: m.genre,
            actors: m.actors,
            created_at: m.created_at,
        }
    }
}

/// Movie joined with its reviews. `averageRating` is `null` for unreviewed movies.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RatedMovieResponse {
    #[serde(flatten)]
    pub movie: MovieResponse,
    pub reviews: Vec<ReviewResponse>,
    pub average_rating: Option<f64>,
}

impl From<RatedMovie> for RatedMovieResponse {
    fn from(r: RatedMovie) -> Self {
        Self {
            movie: r.movie.into(),
            reviews: r.reviews.into_iter().map(ReviewResponse::from).collect(),
            average_rating: r.average_rating,
        }
    }
}

#[derive(Serialize)]
#[serde(untagged)]
pub enum MovieBody {
    Plain(MovieResponse),
    WithReviews(RatedMovieResponse),
}

#[derive(Serialize)]
#[serde(untagged)]
pub enum MovieListBody {
    Plain(Vec<MovieResponse>),
    Ranked(Vec<RatedMovieResponse>),
}

// ── Query params ─────────────────────────────────────────────────────────────

/// Flags are on only for the literal value `true`.
#[derive(Deserialize, Default)]
pub struct MovieListQuery {
    pub reviews: Option<String>,
    pub complete: Option<String>,
}

fn flag(value: &Option<String>) -> bool {
    value.as_deref() == Some("true")
}

// ── GET /movies ──────────────────────────────────────────────────────────────

#[derive(Serialize)]
pub struct MoviesResponse {
    pub success: bool,
    pub movies: MovieListBody,
}

pub async fn list_movies(
    _identity: Identity,
    State(state): State<AppState>,
    query: Result<Query<MovieListQuery>, QueryRejection>,
) -> Result<Json<MoviesResponse>, ApiError> {
    let Query(query) = query.map_err(|e| ApiError::Validation(e.body_text()))?;
    let usecase = ListMoviesUseCase {
        movies: state.movie_repo(),
    };
    let listing = usecase
        .execute(ListMoviesInput {
            with_reviews: flag(&query.reviews),
            complete_only: flag(&query.complete),
        })
        .await?;
    let movies = match listing {
        MovieListing::Plain(list) => {
            MovieListBody::Plain(list.into_iter().map(MovieResponse::from).collect())
        }
        MovieListing::Ranked(list) => {
            MovieListBody::Ranked(list.into_iter().map(RatedMovieResponse::from).collect())
        }
    };
    Ok(Json(MoviesResponse {
        success: true,
        movies,
    }))
}

// ── POST /movies ─────────────────────────────────────────────────────────────

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateMovieRequest {
    #[serde(default, deserialize_with = "marquee_core::serde::non_blank")]
    pub title: Option<String>,
    pub release_date: Option<NaiveDate>,
    #[serde(default, deserialize_with = "marquee_core::serde::non_blank")]
    pub genre: Option<String>,
    pub actors: Option<Vec<String>>,
}

pub async fn create_movie(
    identity: Identity,
    State(state): State<AppState>,
    body: Result<Json<CreateMovieRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<MovieResponse>), ApiError> {
    let Json(body) = body.map_err(|e| ApiError::Validation(e.body_text()))?;
    let usecase = CreateMovieUseCase {
        movies: state.movie_repo(),
    };
    let movie = usecase
        .execute(CreateMovieInput {
            title: body.title,
            release_date: body.release_date,
            genre: body.genre,
            actors: body.actors,
        })
        .await?;
    tracing::info!(movie_id = %movie.id, user_id = %identity.user_id, "movie created");
    Ok((StatusCode::CREATED, Json(movie.into())))
}

// ── GET /movies/{id} ─────────────────────────────────────────────────────────

#[derive(Deserialize, Default)]
pub struct MovieDetailQuery {
    pub reviews: Option<String>,
}

#[derive(Serialize)]
pub struct MovieDetailResponse {
    pub success: bool,
    pub movie: MovieBody,
}

pub async fn get_movie(
    _identity: Identity,
    State(state): State<AppState>,
    Path(id): Path<String>,
    query: Result<Query<MovieDetailQuery>, QueryRejection>,
) -> Result<Json<MovieDetailResponse>, ApiError> {
    let Query(query) = query.map_err(|e| ApiError::Validation(e.body_text()))?;
    let usecase = GetMovieUseCase {
        movies: state.movie_repo(),
    };
    let movie = match usecase.execute(&id, flag(&query.reviews)).await? {
        MovieDetail::Plain(m) => MovieBody::Plain(m.into()),
        MovieDetail::WithReviews(r) => MovieBody::WithReviews(r.into()),
    };
    Ok(Json(MovieDetailResponse {
        success: true,
        movie,
    }))
}

// ── GET /movies/title/{title} ────────────────────────────────────────────────

#[derive(Serialize)]
pub struct MovieEnvelope {
    pub movie: MovieResponse,
}

pub async fn get_movie_by_title(
    _identity: Identity,
    State(state): State<AppState>,
    Path(title): Path<String>,
) -> Result<Json<MovieEnvelope>, ApiError> {
    let usecase = GetMovieByTitleUseCase {
        movies: state.movie_repo(),
    };
    let movie = usecase.execute(&title).await?;
    Ok(Json(MovieEnvelope {
        movie: movie.into(),
    }))
}

// ── PUT /movies/title/{title} ────────────────────────────────────────────────

/// Partial update; absent fields are left as they are.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateMovieRequest {
    pub title: Option<String>,
    pub release_date: Option<NaiveDate>,
    pub genre: Option<String>,
    pub actors: Option<Vec<String>>,
}

pub async fn update_movie_by_title(
    identity: Identity,
    State(state): State<AppState>,
    Path(title): Path<String>,
    body: Result<Json<UpdateMovieRequest>, JsonRejection>,
) -> Result<Json<MovieEnvelope>, ApiError> {
    let Json(body) = body.map_err(|e| ApiError::Validation(e.body_text()))?;
    let usecase = UpdateMovieUseCase {
        movies: state.movie_repo(),
    };
    let movie = usecase
        .execute(
            &title,
            MovieChanges {
                title: body.title,
                release_date: body.release_date,
                genre: body.genre,
                actors: body.actors,
            },
        )
        .await?;
    tracing::info!(movie_id = %movie.id, user_id = %identity.user_id, "movie updated");
    Ok(Json(MovieEnvelope {
        movie: movie.into(),
    }))
}

// ── DELETE /movies/title/{title} ─────────────────────────────────────────────

#[derive(Serialize)]
pub struct DeleteMovieResponse {
    pub message: &'static str,
}

pub async fn delete_movie_by_title(
    identity: Identity,
    State(state): State<AppState>,
    Path(title): Path<String>,
) -> Result<Json<DeleteMovieResponse>, ApiError> {
    let usecase = DeleteMovieUseCase {
        movies: state.movie_repo(),
    };
    usecase.execute(&title).await?;
    tracing::info!(title = %title, user_id = %identity.user_id, "movie deleted");
    Ok(Json(DeleteMovieResponse {
        message: "Movie deleted successfully",
    }))
}
