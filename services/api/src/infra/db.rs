use anyhow::Context as _;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait,
    IntoActiveModel as _, LoaderTrait as _, ModelTrait as _, PaginatorTrait as _, QueryFilter,
    QueryOrder, Select, SqlErr, sea_query::Expr,
};
use uuid::Uuid;

use marquee_api_schema::{movies, reviews, users};

use crate::domain::repository::{MovieRepository, ReviewRepository, UserRepository};
use crate::domain::types::{Movie, MovieChanges, Review, User};
use crate::error::ApiError;

// ── User repository ──────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbUserRepository {
    pub db: DatabaseConnection,
}

impl UserRepository for DbUserRepository {
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, ApiError> {
        let model = users::Entity::find()
            .filter(users::Column::Username.eq(username))
            .one(&self.db)
            .await
            .context("find user by username")?;
        Ok(model.map(user_from_model))
    }

    async fn create(&self, user: &User) -> Result<(), ApiError> {
        users::ActiveModel {
            id: Set(user.id),
            name: Set(user.name.clone()),
            username: Set(user.username.clone()),
            password: Set(user.password_hash.clone()),
            created_at: Set(user.created_at),
        }
        .insert(&self.db)
        .await
        .map_err(|e| match e.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(_)) => ApiError::UsernameTaken,
            _ => ApiError::Internal(anyhow::Error::from(e).context("create user")),
        })?;
        Ok(())
    }
}

fn user_from_model(model: users::Model) -> User {
    User {
        id: model.id,
        name: model.name,
        username: model.username,
        password_hash: model.password,
        created_at: model.created_at,
    }
}

// ── Movie repository ─────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbMovieRepository {
    pub db: DatabaseConnection,
}

impl DbMovieRepository {
    fn ordered() -> Select<movies::Entity> {
        movies::Entity::find()
            .order_by_asc(movies::Column::CreatedAt)
            .order_by_asc(movies::Column::Id)
    }

    async fn first_by_title(&self, title: &str) -> Result<Option<movies::Model>, ApiError> {
        let model = Self::ordered()
            .filter(movies::Column::Title.eq(title))
            .one(&self.db)
            .await
            .context("find movie by title")?;
        Ok(model)
    }
}

impl MovieRepository for DbMovieRepository {
    async fn list(&self, complete_only: bool) -> Result<Vec<Movie>, ApiError> {
        let mut query = Self::ordered();
        if complete_only {
            query = query
                .filter(movies::Column::Title.ne(""))
                .filter(movies::Column::ReleaseDate.is_not_null())
                .filter(movies::Column::Genre.is_not_null())
                .filter(Expr::cust("jsonb_array_length(movies.actors) > 0"));
        }
        let models = query.all(&self.db).await.context("list movies")?;
        let movies = models
            .into_iter()
            .map(movie_from_model)
            .collect::<anyhow::Result<Vec<_>>>()?;
        Ok(movies)
    }

    async fn list_with_reviews(&self) -> Result<Vec<(Movie, Vec<Review>)>, ApiError> {
        let models = Self::ordered()
            .all(&self.db)
            .await
            .context("list movies")?;
        let related = models
            .load_many(
                reviews::Entity::find().order_by_asc(reviews::Column::CreatedAt),
                &self.db,
            )
            .await
            .context("load reviews for movies")?;

        let mut out = Vec::with_capacity(models.len());
        for (model, review_models) in models.into_iter().zip(related) {
            let reviews = review_models.into_iter().map(review_from_model).collect();
            out.push((movie_from_model(model)?, reviews));
        }
        Ok(out)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Movie>, ApiError> {
        let model = movies::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find movie by id")?;
        Ok(model.map(movie_from_model).transpose()?)
    }

    async fn find_by_id_with_reviews(
        &self,
        id: Uuid,
    ) -> Result<Option<(Movie, Vec<Review>)>, ApiError> {
        let Some(model) = movies::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find movie by id")?
        else {
            return Ok(None);
        };
        let reviews = model
            .find_related(reviews::Entity)
            .order_by_asc(reviews::Column::CreatedAt)
            .all(&self.db)
            .await
            .context("find reviews for movie")?
            .into_iter()
            .map(review_from_model)
            .collect();
        Ok(Some((movie_from_model(model)?, reviews)))
    }

    async fn find_by_title(&self, title: &str) -> Result<Option<Movie>, ApiError> {
        let model = self.first_by_title(title).await?;
        Ok(model.map(movie_from_model).transpose()?)
    }

    async fn create(&self, movie: &Movie) -> Result<(), ApiError> {
        let actors = serde_json::to_value(&movie.actors).context("encode actors")?;
        movies::ActiveModel {
            id: Set(movie.id),
            title: Set(movie.title.clone()),
            release_date: Set(movie.release_date),
            genre: Set(movie.genre.clone()),
            actors: Set(actors),
            created_at: Set(movie.created_at),
        }
        .insert(&self.db)
        .await
        .context("create movie")?;
        Ok(())
    }

    async fn update_by_title(
        &self,
        title: &str,
        changes: &MovieChanges,
    ) -> Result<Option<Movie>, ApiError> {
        let Some(model) = self.first_by_title(title).await? else {
            return Ok(None);
        };
        if changes.is_empty() {
            return Ok(Some(movie_from_model(model)?));
        }

        let mut am = model.into_active_model();
        if let Some(ref new_title) = changes.title {
            am.title = Set(new_title.clone());
        }
        if let Some(date) = changes.release_date {
            am.release_date = Set(Some(date));
        }
        if let Some(ref genre) = changes.genre {
            am.genre = Set(Some(genre.clone()));
        }
        if let Some(ref actors) = changes.actors {
            am.actors = Set(serde_json::to_value(actors).context("encode actors")?);
        }
        let updated = am.update(&self.db).await.context("update movie")?;
        Ok(Some(movie_from_model(updated)?))
    }

    async fn delete_by_title(&self, title: &str) -> Result<bool, ApiError> {
        let Some(model) = self.first_by_title(title).await? else {
            return Ok(false);
        };
        let result = movies::Entity::delete_by_id(model.id)
            .exec(&self.db)
            .await
            .context("delete movie")?;
        Ok(result.rows_affected > 0)
    }

    async fn exists(&self, id: Uuid) -> Result<bool, ApiError> {
        let count = movies::Entity::find_by_id(id)
            .count(&self.db)
            .await
            .context("check movie exists")?;
        Ok(count > 0)
    }
}

fn movie_from_model(model: movies::Model) -> anyhow::Result<Movie> {
    let actors: Vec<String> =
        serde_json::from_value(model.actors).context("decode actors column")?;
    Ok(Movie {
        id: model.id,
        title: model.title,
        release_date: model.release_date,
        genre: model.genre,
        actors,
        created_at: model.created_at,
    })
}

// ── Review repository ────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbReviewRepository {
    pub db: DatabaseConnection,
}

impl ReviewRepository for DbReviewRepository {
    async fn list(&self) -> Result<Vec<Review>, ApiError> {
        let models = reviews::Entity::find()
            .order_by_asc(reviews::Column::CreatedAt)
            .all(&self.db)
            .await
            .context("list reviews")?;
        Ok(models.into_iter().map(review_from_model).collect())
    }

    async fn create(&self, review: &Review) -> Result<(), ApiError> {
        reviews::ActiveModel {
            id: Set(review.id),
            movie_id: Set(review.movie_id),
            username: Set(review.username.clone()),
            review: Set(review.review.clone()),
            rating: Set(review.rating),
            created_at: Set(review.created_at),
        }
        .insert(&self.db)
        .await
        .context("create review")?;
        Ok(())
    }
}

fn review_from_model(model: reviews::Model) -> Review {
    Review {
        id: model.id,
        movie_id: model.movie_id,
        username: model.username,
        review: model.review,
        rating: model.rating,
        created_at: model.created_at,
    }
}
