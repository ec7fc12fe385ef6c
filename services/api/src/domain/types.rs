use std::cmp::Ordering;

use chrono::{DateTime, NaiveDate, Utc};
use uuid::Uuid;

/// Lowest accepted review rating.
pub const MIN_RATING: f64 = 0.0;

/// Highest accepted review rating.
pub const MAX_RATING: f64 = 5.0;

/// Registered account. `password_hash` is a bcrypt hash.
#[derive(Debug, Clone)]
pub struct User {
    pub id: Uuid,
    pub name: Option<String>,
    pub username: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Movie {
    pub id: Uuid,
    pub title: String,
    pub release_date: Option<NaiveDate>,
    pub genre: Option<String>,
    pub actors: Vec<String>,
    pub created_at: DateTime<Utc>,
}

impl Movie {
    /// Every descriptive field is filled in.
    pub fn is_complete(&self) -> bool {
        !self.title.trim().is_empty()
            && self.release_date.is_some()
            && self.genre.is_some()
            && !self.actors.is_empty()
    }
}

/// Partial update for a movie. `None` leaves the field unchanged.
#[derive(Debug, Clone, Default)]
pub struct MovieChanges {
    pub title: Option<String>,
    pub release_date: Option<NaiveDate>,
    pub genre: Option<String>,
    pub actors: Option<Vec<String>>,
}

impl MovieChanges {
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.release_date.is_none()
            && self.genre.is_none()
            && self.actors.is_none()
    }

    pub fn apply(&self, movie: &mut Movie) {
        if let Some(ref title) = self.title {
            movie.title = title.clone();
        }
        if let Some(date) = self.release_date {
            movie.release_date = Some(date);
        }
        if let Some(ref genre) = self.genre {
            movie.genre = Some(genre.clone());
        }
        if let Some(ref actors) = self.actors {
            movie.actors = actors.clone();
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Review {
    pub id: Uuid,
    pub movie_id: Uuid,
    pub username: String,
    pub review: String,
    pub rating: f64,
    pub created_at: DateTime<Utc>,
}

pub fn is_valid_rating(rating: f64) -> bool {
    rating.is_finite() && (MIN_RATING..=MAX_RATING).contains(&rating)
}

/// Mean rating, or `None` when there are no reviews.
pub fn average_rating(reviews: &[Review]) -> Option<f64> {
    if reviews.is_empty() {
        return None;
    }
    let sum: f64 = reviews.iter().map(|r| r.rating).sum();
    Some(sum / reviews.len() as f64)
}

/// A movie joined with its reviews.
#[derive(Debug, Clone)]
pub struct RatedMovie {
    pub movie: Movie,
    pub reviews: Vec<Review>,
    pub average_rating: Option<f64>,
}

impl RatedMovie {
    pub fn new(movie: Movie, reviews: Vec<Review>) -> Self {
        let average_rating = average_rating(&reviews);
        Self {
            movie,
            reviews,
            average_rating,
        }
    }
}

/// Sort by average rating, highest first. Unrated movies go last; the sort is
/// stable, so ties keep their incoming order.
pub fn rank_by_average(movies: &mut [RatedMovie]) {
    movies.sort_by(|a, b| match (a.average_rating, b.average_rating) {
        (Some(x), Some(y)) => y.total_cmp(&x),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    });
}
