use serde::{Deserialize, Serialize};

use crate::domain::{BookingDraft, RoomType};

/// Payload posted to the booking endpoint: the full draft, in the wire
/// casing the backend expects. Fields are copied verbatim, including any
/// surrounding whitespace the guest typed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingRequest {
    pub name: String,
    pub email: String,
    pub check_in: String,
    pub check_out: String,
    pub room_type: RoomType,
    pub guests: i64,
}

impl From<&BookingDraft> for BookingRequest {
    fn from(draft: &BookingDraft) -> Self {
        Self {
            name: draft.name.clone(),
            email: draft.email.clone(),
            check_in: draft.check_in.clone(),
            check_out: draft.check_out.clone(),
            room_type: draft.room_type,
            guests: draft.guests,
        }
    }
}

/// The backend may mint booking identifiers as strings or numbers; either
/// is rendered verbatim into the confirmation line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BookingId {
    Text(String),
    Number(i64),
}

impl std::fmt::Display for BookingId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BookingId::Text(s) => f.write_str(s),
            BookingId::Number(n) => write!(f, "{n}"),
        }
    }
}

/// Body of an ok response.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingAccepted {
    pub booking_id: BookingId,
}

/// Body of a not-ok response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingRejected {
    pub message: String,
}
