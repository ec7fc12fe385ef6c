//! Test utilities for Marquee services.
//!
//! Import from dev-dependencies only; never in production code.

pub mod auth;
pub mod body;
