use axum::{
    Router,
    routing::{get, post},
};

use marquee_core::health::healthz;
use marquee_core::middleware::{propagate_request_id_layer, request_id_layer, trace_layer};

use crate::handlers::{
    account::{signin, signup},
    echo::{delete_movies, method_not_allowed, post_movie_title, update_movies},
    health::readyz,
    movie::{
        create_movie, delete_movie_by_title, get_movie, get_movie_by_title, list_movies,
        update_movie_by_title,
    },
    review::{create_review, list_reviews},
};
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Health
        .route("/healthz", get(healthz))
        .route("/readyz", get(readyz))
        // Accounts
        .route("/signup", post(signup))
        .route("/signin", post(signin))
        // Movies
        .route(
            "/movies",
            get(list_movies)
                .post(create_movie)
                .put(update_movies)
                .delete(delete_movies)
                .fallback(method_not_allowed),
        )
        .route(
            "/movies/title/{title}",
            get(get_movie_by_title)
                .post(post_movie_title)
                .put(update_movie_by_title)
                .delete(delete_movie_by_title)
                .fallback(method_not_allowed),
        )
        .route(
            "/movies/{id}",
            get(get_movie).fallback(method_not_allowed),
        )
        // Reviews
        .route("/reviews", get(list_reviews).post(create_review))
        .layer(trace_layer())
        .layer(propagate_request_id_layer())
        .layer(request_id_layer())
        .with_state(state)
}
