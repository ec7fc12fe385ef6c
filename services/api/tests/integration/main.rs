mod helpers;
mod movie_test;
mod review_test;
