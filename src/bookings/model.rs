//! Booking record and the create-request payload.

use serde::{Deserialize, Serialize};

/// A stored booking.
///
/// `id` is caller-supplied and not required to be unique.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: i32,
    pub guest_name: String,
    pub room_type: Option<String>,
}

impl Booking {
    pub fn new(id: i32, guest_name: impl Into<String>, room_type: impl Into<String>) -> Self {
        Self {
            id,
            guest_name: guest_name.into(),
            room_type: Some(room_type.into()),
        }
    }

    /// The records a fresh service starts with.
    pub fn seed() -> Vec<Booking> {
        vec![
            Booking::new(1, "John Wick", "Continental Suite"),
            Booking::new(2, "Ellen Ripley", "Stasis Pod"),
            Booking::new(3, "Arthur Dent", "Heart of Gold Cabin"),
        ]
    }
}

/// Body of a create request, before the required-field check.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct BookingDraft {
    #[serde(default)]
    pub id: i32,
    #[serde(default)]
    pub guest_name: Option<String>,
    #[serde(default)]
    pub room_type: Option<String>,
}

/// Why a create request body was rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DraftError {
    #[error("Malformed JSON request")]
    Malformed,
    #[error("Guest name is required")]
    MissingGuestName,
}

impl BookingDraft {
    /// Parse a raw request body and enforce the guest-name requirement.
    pub fn parse(body: &[u8]) -> Result<Booking, DraftError> {
        let draft: BookingDraft = serde_json::from_slice(body).map_err(|_| DraftError::Malformed)?;
        draft.into_booking()
    }

    pub fn into_booking(self) -> Result<Booking, DraftError> {
        match self.guest_name {
            Some(name) if !name.trim().is_empty() => Ok(Booking {
                id: self.id,
                guest_name: name,
                room_type: self.room_type,
            }),
            _ => Err(DraftError::MissingGuestName),
        }
    }
}
