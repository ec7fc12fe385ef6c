use uuid::Uuid;

use marquee_api::error::ApiError;
use marquee_api::usecase::review::{CreateReviewInput, CreateReviewUseCase, ListReviewsUseCase};

use crate::helpers::{MockMovieRepo, MockReviewRepo, MockStore, test_movie};

fn usecase(store: &MockStore) -> CreateReviewUseCase<MockMovieRepo, MockReviewRepo> {
    CreateReviewUseCase {
        movies: store.movie_repo(),
        reviews: store.review_repo(),
    }
}

fn input(movie_id: Option<String>, rating: Option<f64>) -> CreateReviewInput {
    CreateReviewInput {
        movie_id,
        review: Some("tense and long".into()),
        rating,
    }
}

#[tokio::test]
async fn review_is_attributed_to_caller() {
    let movie = test_movie("Heat");
    let store = MockStore::with_movies(vec![movie.clone()]);

    let review = usecase(&store)
        .execute("vincent", input(Some(movie.id.to_string()), Some(4.0)))
        .await
        .unwrap();

    assert_eq!(review.username, "vincent");
    assert_eq!(review.movie_id, movie.id);
    assert_eq!(store.reviews.lock().unwrap().len(), 1);
}

#[tokio::test]
async fn review_for_missing_movie_is_not_stored() {
    let store = MockStore::with_movies(vec![test_movie("Heat")]);

    let unknown = usecase(&store)
        .execute("vincent", input(Some(Uuid::now_v7().to_string()), Some(3.0)))
        .await;
    assert!(matches!(unknown, Err(ApiError::MovieNotFound)));

    let garbage = usecase(&store)
        .execute("vincent", input(Some("heat".into()), Some(3.0)))
        .await;
    assert!(matches!(garbage, Err(ApiError::MovieNotFound)));

    assert!(store.reviews.lock().unwrap().is_empty());
}

#[tokio::test]
async fn missing_fields_fail_validation() {
    let movie = test_movie("Heat");
    let store = MockStore::with_movies(vec![movie.clone()]);

    let no_movie = usecase(&store).execute("vincent", input(None, Some(3.0))).await;
    assert!(matches!(no_movie, Err(ApiError::Validation(_))));

    let no_rating = usecase(&store)
        .execute("vincent", input(Some(movie.id.to_string()), None))
        .await;
    assert!(matches!(no_rating, Err(ApiError::Validation(_))));

    let no_text = usecase(&store)
        .execute(
            "vincent",
            CreateReviewInput {
                review: None,
                ..input(Some(movie.id.to_string()), Some(3.0))
            },
        )
        .await;
    assert!(matches!(no_text, Err(ApiError::Validation(_))));
}

#[tokio::test]
async fn out_of_range_rating_fails_validation() {
    let movie = test_movie("Heat");
    let store = MockStore::with_movies(vec![movie.clone()]);

    for rating in [-1.0, 5.5, f64::NAN] {
        let result = usecase(&store)
            .execute("vincent", input(Some(movie.id.to_string()), Some(rating)))
            .await;
        assert!(
            matches!(result, Err(ApiError::Validation(_))),
            "rating {rating} accepted"
        );
    }
    assert!(store.reviews.lock().unwrap().is_empty());
}

#[tokio::test]
async fn empty_review_list_is_not_found() {
    let store = MockStore::default();
    let result = ListReviewsUseCase {
        reviews: store.review_repo(),
    }
    .execute()
    .await;
    assert!(matches!(result, Err(ApiError::NoReviewsFound)));

    store.add_review(Uuid::now_v7(), 3.0);
    let reviews = ListReviewsUseCase {
        reviews: store.review_repo(),
    }
    .execute()
    .await
    .unwrap();
    assert_eq!(reviews.len(), 1);
}
