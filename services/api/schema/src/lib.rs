//! sea-orm entities for the Marquee API tables.

pub mod movies;
pub mod reviews;
pub mod users;
