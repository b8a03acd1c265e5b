//! In-memory booking service library.

pub mod bookings;
pub mod config;
pub mod docs;
pub mod health;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod routing;
pub mod security;

pub use bookings::{Booking, BookingStore};
pub use config::ServiceConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
