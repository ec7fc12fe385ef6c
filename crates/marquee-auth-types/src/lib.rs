//! Auth types shared by the Marquee API and its test helpers.
//!
//! Provides the JWT claims payload, token validation, and the `Identity` extractor
//! that gates protected routes.

pub mod identity;
pub mod token;
