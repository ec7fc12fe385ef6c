pub mod account;
pub mod movie;
pub mod review;
pub mod token;
