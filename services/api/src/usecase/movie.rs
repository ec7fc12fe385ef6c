use chrono::{NaiveDate, Utc};
use uuid::Uuid;

use crate::domain::repository::MovieRepository;
use crate::domain::types::{Movie, MovieChanges, RatedMovie, rank_by_average};
use crate::error::ApiError;

// ── ListMovies ───────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, Default)]
pub struct ListMoviesInput {
    /// Join reviews and rank by average rating.
    pub with_reviews: bool,
    /// Skip movies with missing fields.
    pub complete_only: bool,
}

#[derive(Debug)]
pub enum MovieListing {
    Plain(Vec<Movie>),
    Ranked(Vec<RatedMovie>),
}

pub struct ListMoviesUseCase<M: MovieRepository> {
    pub movies: M,
}

impl<M: MovieRepository> ListMoviesUseCase<M> {
    /// Fails with [`ApiError::NoMoviesFound`] rather than returning an empty listing.
    pub async fn execute(&self, input: ListMoviesInput) -> Result<MovieListing, ApiError> {
        if !input.with_reviews {
            let movies = self.movies.list(input.complete_only).await?;
            if movies.is_empty() {
                return Err(ApiError::NoMoviesFound);
            }
            return Ok(MovieListing::Plain(movies));
        }

        let mut ranked: Vec<RatedMovie> = self
            .movies
            .list_with_reviews()
            .await?
            .into_iter()
            .filter(|(movie, _)| !input.complete_only || movie.is_complete())
            .map(|(movie, reviews)| RatedMovie::new(movie, reviews))
            .collect();
        if ranked.is_empty() {
            return Err(ApiError::NoMoviesFound);
        }
        rank_by_average(&mut ranked);
        Ok(MovieListing::Ranked(ranked))
    }
}

// ── CreateMovie ──────────────────────────────────────────────────────────────

pub struct CreateMovieInput {
    pub title: Option<String>,
    pub release_date: Option<NaiveDate>,
    pub genre: Option<String>,
    pub actors: Option<Vec<String>>,
}

pub struct CreateMovieUseCase<M: MovieRepository> {
    pub movies: M,
}

impl<M: MovieRepository> CreateMovieUseCase<M> {
    pub async fn execute(&self, input: CreateMovieInput) -> Result<Movie, ApiError> {
        let title = input
            .title
            .ok_or_else(|| ApiError::Validation("title is required".into()))?;
        let movie = Movie {
            id: Uuid::now_v7(),
            title,
            release_date: input.release_date,
            genre: input.genre,
            actors: input.actors.unwrap_or_default(),
            created_at: Utc::now(),
        };
        self.movies.create(&movie).await?;
        Ok(movie)
    }
}

// ── GetMovie (by id) ─────────────────────────────────────────────────────────

#[derive(Debug)]
pub enum MovieDetail {
    Plain(Movie),
    WithReviews(RatedMovie),
}

pub struct GetMovieUseCase<M: MovieRepository> {
    pub movies: M,
}

impl<M: MovieRepository> GetMovieUseCase<M> {
    /// `id` is taken raw from the path; anything that is not a UUID cannot name a
    /// movie and yields [`ApiError::MovieNotFound`].
    pub async fn execute(&self, id: &str, with_reviews: bool) -> Result<MovieDetail, ApiError> {
        let id = id.parse::<Uuid>().map_err(|_| ApiError::MovieNotFound)?;
        if with_reviews {
            let (movie, reviews) = self
                .movies
                .find_by_id_with_reviews(id)
                .await?
                .ok_or(ApiError::MovieNotFound)?;
            return Ok(MovieDetail::WithReviews(RatedMovie::new(movie, reviews)));
        }
        let movie = self
            .movies
            .find_by_id(id)
            .await?
            .ok_or(ApiError::MovieNotFound)?;
        Ok(MovieDetail::Plain(movie))
    }
}

// ── GetMovieByTitle ──────────────────────────────────────────────────────────

pub struct GetMovieByTitleUseCase<M: MovieRepository> {
    pub movies: M,
}

impl<M: MovieRepository> GetMovieByTitleUseCase<M> {
    pub async fn execute(&self, title: &str) -> Result<Movie, ApiError> {
        self.movies
            .find_by_title(title)
            .await?
            .ok_or(ApiError::MovieNotFound)
    }
}

// ── UpdateMovie ──────────────────────────────────────────────────────────────

pub struct UpdateMovieUseCase<M: MovieRepository> {
    pub movies: M,
}

impl<M: MovieRepository> UpdateMovieUseCase<M> {
    pub async fn execute(&self, title: &str, changes: MovieChanges) -> Result<Movie, ApiError> {
        if changes
            .title
            .as_deref()
            .is_some_and(|t| t.trim().is_empty())
        {
            return Err(ApiError::Validation("title must not be empty".into()));
        }
        self.movies
            .update_by_title(title, &changes)
            .await?
            .ok_or(ApiError::MovieNotFound)
    }
}

// ── DeleteMovie ──────────────────────────────────────────────────────────────

pub struct DeleteMovieUseCase<M: MovieRepository> {
    pub movies: M,
}

impl<M: MovieRepository> DeleteMovieUseCase<M> {
    pub async fn execute(&self, title: &str) -> Result<(), ApiError> {
        if !self.movies.delete_by_title(title).await? {
            return Err(ApiError::MovieNotFound);
        }
        Ok(())
    }
}
