//! In-memory booking collection.
//!
//! Readers take an `Arc` snapshot of the backing vector and never block.
//! Writers build a new vector and install it with `ArcSwap::rcu`, which
//! retries when another writer got there first, so concurrent adds are
//! never lost.

use arc_swap::ArcSwap;
use std::sync::Arc;

use crate::bookings::model::Booking;

pub struct BookingStore {
    entries: ArcSwap<Vec<Booking>>,
}

impl BookingStore {
    /// Create a store holding `initial` in insertion order.
    pub fn new(initial: Vec<Booking>) -> Self {
        Self {
            entries: ArcSwap::from_pointee(initial),
        }
    }

    /// Create a store holding the demo bookings.
    pub fn seeded() -> Self {
        Self::new(Booking::seed())
    }

    /// Snapshot of every booking in insertion order.
    pub fn list_all(&self) -> Arc<Vec<Booking>> {
        self.entries.load_full()
    }

    /// First booking with the given id, if any.
    pub fn get_by_id(&self, id: i32) -> Option<Booking> {
        self.entries.load().iter().find(|b| b.id == id).cloned()
    }

    /// Append a booking. Duplicate ids are accepted.
    pub fn add(&self, booking: Booking) {
        self.entries.rcu(|current| {
            let mut next = Vec::with_capacity(current.len() + 1);
            next.extend(current.iter().cloned());
            next.push(booking.clone());
            next
        });
    }

    /// Remove every booking with the given id. Returns whether any matched.
    pub fn remove_by_id(&self, id: i32) -> bool {
        if !self.entries.load().iter().any(|b| b.id == id) {
            return false;
        }
        let previous = self.entries.rcu(|current| {
            current
                .iter()
                .filter(|b| b.id != id)
                .cloned()
                .collect::<Vec<_>>()
        });
        previous.iter().any(|b| b.id == id)
    }

    pub fn len(&self) -> usize {
        self.entries.load().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for BookingStore {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}
