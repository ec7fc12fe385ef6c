//! Shared HTTP plumbing for Marquee services.

pub mod health;
pub mod middleware;
pub mod serde;
pub mod tracing;
