//! Request routing subsystem.
//!
//! # Data Flow
//! ```text
//! Incoming request path
//!     → matcher.rs (inside /bookings? collection or item?)
//!     → BookingTarget handed to the resource handler
//!     → handler parses the item id when the operation needs it
//! ```
//!
//! # Design Decisions
//! - Static endpoints (/health, /docs, /swagger.json) are axum routes
//! - Everything else falls through to the booking dispatcher, which
//!   owns the /bookings prefix the way a servlet mapping would

pub mod matcher;

pub use matcher::{item_path, BookingTarget, InvalidId, BOOKINGS_PREFIX};
