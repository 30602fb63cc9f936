//! Data structures exchanged between the frontend and the rooms API.

use serde::{Deserialize, Serialize};

use crate::id::RoomId;

/// A room the current user is a member of.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Room {
    pub id: RoomId,
    /// Human-shareable join key.
    pub code: String,
}

/// Body of `POST /rooms`. Without a code the backend creates a fresh room.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct JoinRoom {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub room_code: Option<String>,
}

impl JoinRoom {
    pub fn with_code(code: impl Into<String>) -> Self {
        Self {
            room_code: Some(code.into()),
        }
    }

    pub fn create() -> Self {
        Self::default()
    }
}

/// Response of `POST /rooms`, naming the room that was joined or created.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RoomJoined {
    pub room_id: RoomId,
}

/// Error body the API sends alongside non-2xx statuses.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
}
