//! Booking path matching.
//!
//! # Responsibilities
//! - Decide whether a path belongs to the booking resource
//! - Split collection-level from item-level addresses
//! - Parse the item suffix as a decimal id
//!
//! # Design Decisions
//! - Prefix matching is case-sensitive and segment-aligned
//!   (`/bookingsX` is not a booking path)
//! - The item suffix is kept raw so callers decide when to parse it
//! - No regex to guarantee O(n) matching

/// Root path of the booking resource.
pub const BOOKINGS_PREFIX: &str = "/bookings";

/// What a request path addresses within the booking resource.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BookingTarget {
    /// `/bookings` or `/bookings/`.
    Collection,
    /// `/bookings/<suffix>`, suffix not yet validated.
    Item(String),
}

/// The suffix of an item path could not be read as an id.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid ID format")]
pub struct InvalidId;

impl BookingTarget {
    /// Resolve a request path, or `None` when it is outside `/bookings`.
    pub fn from_path(path: &str) -> Option<Self> {
        let rest = path.strip_prefix(BOOKINGS_PREFIX)?;
        match rest {
            "" | "/" => Some(BookingTarget::Collection),
            _ => rest
                .strip_prefix('/')
                .map(|suffix| BookingTarget::Item(suffix.to_string())),
        }
    }

    /// Parse the item suffix as a base-10 id.
    pub fn parse_id(suffix: &str) -> Result<i32, InvalidId> {
        suffix.parse::<i32>().map_err(|_| InvalidId)
    }
}

/// Canonical path of a single booking, used for `Location` headers.
pub fn item_path(id: i32) -> String {
    format!("{}/{}", BOOKINGS_PREFIX, id)
}
