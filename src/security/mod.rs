//! Security subsystem.
//!
//! # Data Flow
//! ```text
//! DELETE /bookings/{id}:
//!     → auth.rs (compare Authorization header with configured credential)
//!     → 401 + WWW-Authenticate challenge on mismatch
//!     → otherwise hand back to the resource handler
//! ```
//!
//! # Design Decisions
//! - Only deletes are gated; reads and creates are open
//! - Fail closed: missing or malformed headers are rejections
//! - Request body size is capped in http::request, not here

pub mod auth;

pub use auth::AuthGate;
