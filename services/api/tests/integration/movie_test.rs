use chrono::NaiveDate;

use marquee_api::domain::types::MovieChanges;
use marquee_api::error::ApiError;
use marquee_api::usecase::movie::{
    CreateMovieInput, CreateMovieUseCase, DeleteMovieUseCase, GetMovieByTitleUseCase,
    GetMovieUseCase, ListMoviesInput, ListMoviesUseCase, MovieDetail, MovieListing,
    UpdateMovieUseCase,
};

use crate::helpers::{MockStore, test_movie};

fn heat_input() -> CreateMovieInput {
    CreateMovieInput {
        title: Some("Heat".into()),
        release_date: NaiveDate::from_ymd_opt(1995, 12, 15),
        genre: Some("Crime".into()),
        actors: Some(vec!["Al Pacino".into()]),
    }
}

#[tokio::test]
async fn created_movie_is_readable_by_title_and_id() {
    let store = MockStore::default();
    let created = CreateMovieUseCase {
        movies: store.movie_repo(),
    }
    .execute(heat_input())
    .await
    .unwrap();

    let by_title = GetMovieByTitleUseCase {
        movies: store.movie_repo(),
    }
    .execute("Heat")
    .await
    .unwrap();
    assert_eq!(by_title, created);

    let by_id = GetMovieUseCase {
        movies: store.movie_repo(),
    }
    .execute(&created.id.to_string(), false)
    .await
    .unwrap();
    match by_id {
        MovieDetail::Plain(m) => assert_eq!(m, created),
        other => panic!("expected plain movie, got {other:?}"),
    }
}

#[tokio::test]
async fn create_without_title_is_rejected_and_not_stored() {
    let store = MockStore::default();
    let result = CreateMovieUseCase {
        movies: store.movie_repo(),
    }
    .execute(CreateMovieInput {
        title: None,
        ..heat_input()
    })
    .await;

    assert!(matches!(result, Err(ApiError::Validation(_))));
    assert!(store.movies.lock().unwrap().is_empty());
}

#[tokio::test]
async fn deleted_movie_is_not_found_afterwards() {
    let store = MockStore::with_movies(vec![test_movie("Heat")]);
    DeleteMovieUseCase {
        movies: store.movie_repo(),
    }
    .execute("Heat")
    .await
    .unwrap();

    let lookup = GetMovieByTitleUseCase {
        movies: store.movie_repo(),
    }
    .execute("Heat")
    .await;
    assert!(matches!(lookup, Err(ApiError::MovieNotFound)));

    let again = DeleteMovieUseCase {
        movies: store.movie_repo(),
    }
    .execute("Heat")
    .await;
    assert!(matches!(again, Err(ApiError::MovieNotFound)));
}

#[tokio::test]
async fn get_by_unparsable_id_is_not_found() {
    let store = MockStore::with_movies(vec![test_movie("Heat")]);
    let result = GetMovieUseCase {
        movies: store.movie_repo(),
    }
    .execute("not-a-uuid", true)
    .await;
    assert!(matches!(result, Err(ApiError::MovieNotFound)));
}

#[tokio::test]
async fn get_with_reviews_carries_average() {
    let movie = test_movie("Heat");
    let store = MockStore::with_movies(vec![movie.clone()]);
    store.add_review(movie.id, 4.0);
    store.add_review(movie.id, 5.0);

    let detail = GetMovieUseCase {
        movies: store.movie_repo(),
    }
    .execute(&movie.id.to_string(), true)
    .await
    .unwrap();
    match detail {
        MovieDetail::WithReviews(rated) => {
            assert_eq!(rated.reviews.len(), 2);
            assert_eq!(rated.average_rating, Some(4.5));
        }
        other => panic!("expected rated movie, got {other:?}"),
    }
}

#[tokio::test]
async fn empty_catalog_lists_as_not_found() {
    let store = MockStore::default();
    let result = ListMoviesUseCase {
        movies: store.movie_repo(),
    }
    .execute(ListMoviesInput::default())
    .await;
    assert!(matches!(result, Err(ApiError::NoMoviesFound)));
}

#[tokio::test]
async fn ranked_listing_orders_by_average_with_unreviewed_last() {
    let low = test_movie("Low");
    let unrated = test_movie("Unrated");
    let high = test_movie("High");
    let store = MockStore::with_movies(vec![low.clone(), unrated.clone(), high.clone()]);
    store.add_review(low.id, 2.0);
    store.add_review(high.id, 5.0);
    store.add_review(high.id, 4.0);

    let listing = ListMoviesUseCase {
        movies: store.movie_repo(),
    }
    .execute(ListMoviesInput {
        with_reviews: true,
        complete_only: false,
    })
    .await
    .unwrap();

    let MovieListing::Ranked(ranked) = listing else {
        panic!("expected ranked listing");
    };
    let titles: Vec<_> = ranked.iter().map(|r| r.movie.title.as_str()).collect();
    assert_eq!(titles, ["High", "Low", "Unrated"]);
    assert_eq!(ranked[0].average_rating, Some(4.5));
    assert_eq!(ranked[2].average_rating, None);
}

#[tokio::test]
async fn complete_filter_skips_movies_with_missing_fields() {
    let full = test_movie("Full");
    let mut no_genre = test_movie("NoGenre");
    no_genre.genre = None;
    let mut no_actors = test_movie("NoActors");
    no_actors.actors.clear();
    let store = MockStore::with_movies(vec![full, no_genre, no_actors]);

    let listing = ListMoviesUseCase {
        movies: store.movie_repo(),
    }
    .execute(ListMoviesInput {
        with_reviews: false,
        complete_only: true,
    })
    .await
    .unwrap();

    let MovieListing::Plain(movies) = listing else {
        panic!("expected plain listing");
    };
    assert_eq!(movies.len(), 1);
    assert_eq!(movies[0].title, "Full");
}

#[tokio::test]
async fn update_changes_only_supplied_fields() {
    let movie = test_movie("Heat");
    let store = MockStore::with_movies(vec![movie.clone()]);

    let updated = UpdateMovieUseCase {
        movies: store.movie_repo(),
    }
    .execute(
        "Heat",
        MovieChanges {
            genre: Some("Thriller".into()),
            ..Default::default()
        },
    )
    .await
    .unwrap();

    assert_eq!(updated.id, movie.id);
    assert_eq!(updated.title, "Heat");
    assert_eq!(updated.genre.as_deref(), Some("Thriller"));
    assert_eq!(updated.actors, movie.actors);
}

#[tokio::test]
async fn update_rejects_blank_title_and_missing_movie() {
    let store = MockStore::with_movies(vec![test_movie("Heat")]);
    let usecase = UpdateMovieUseCase {
        movies: store.movie_repo(),
    };

    let blank = usecase
        .execute(
            "Heat",
            MovieChanges {
                title: Some("  ".into()),
                ..Default::default()
            },
        )
        .await;
    assert!(matches!(blank, Err(ApiError::Validation(_))));

    let missing = usecase.execute("Ronin", MovieChanges::default()).await;
    assert!(matches!(missing, Err(ApiError::MovieNotFound)));
}
