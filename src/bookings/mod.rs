//! Booking resource subsystem.
//!
//! # Data Flow
//! ```text
//! Request under /bookings
//!     → routing (collection or item?)
//!     → handlers.rs (method dispatch, Auth Gate on delete)
//!     → store.rs (snapshot read / swap-on-write)
//!     → http::response (JSON body or {"error": ...})
//! ```
//!
//! # Design Decisions
//! - One store per server, created at startup and shared by `Arc`
//! - Each request performs at most one store mutation
//! - Last writer wins; each add/remove is atomic with respect to readers

pub mod handlers;
pub mod model;
pub mod store;

pub use model::{Booking, BookingDraft, DraftError};
pub use store::BookingStore;
