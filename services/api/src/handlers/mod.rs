pub mod account;
pub mod echo;
pub mod health;
pub mod movie;
pub mod review;
