//! Liveness endpoint.
//!
//! # Design Decisions
//! - The service has no dependencies to probe; answering at all means UP
//! - HEAD answers with headers only

pub mod handlers;

pub use handlers::{health, health_head};
