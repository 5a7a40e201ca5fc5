use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The three room categories the guest house offers. The set is closed:
/// nothing outside these variants can enter a draft.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoomType {
    #[default]
    Standard,
    Deluxe,
    Family,
}

impl RoomType {
    pub fn as_str(&self) -> &'static str {
        match self {
            RoomType::Standard => "standard",
            RoomType::Deluxe => "deluxe",
            RoomType::Family => "family",
        }
    }
}

impl FromStr for RoomType {
    type Err = UnknownRoomType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "standard" => Ok(RoomType::Standard),
            "deluxe" => Ok(RoomType::Deluxe),
            "family" => Ok(RoomType::Family),
            other => Err(UnknownRoomType(other.to_string())),
        }
    }
}

impl std::fmt::Display for RoomType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownRoomType(pub String);

impl std::fmt::Display for UnknownRoomType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown room type {:?}", self.0)
    }
}

impl std::error::Error for UnknownRoomType {}

/// The in-progress, not-yet-submitted reservation request. One live
/// instance per open booking session; dates are held as the raw ISO 8601
/// strings the date inputs produce ("" means unset).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingDraft {
    pub name: String,
    pub email: String,
    pub check_in: String,
    pub check_out: String,
    pub room_type: RoomType,
    pub guests: i64,
}

impl Default for BookingDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            check_in: String::new(),
            check_out: String::new(),
            room_type: RoomType::Standard,
            guests: 1,
        }
    }
}
