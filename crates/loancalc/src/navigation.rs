//! Where the rooms panel can send the user.

use crate::id::RoomId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Destination {
    /// Unauthenticated landing page.
    Landing,
    /// Rooms root, shown when no room is selected.
    Rooms,
    Room(RoomId),
}

impl Destination {
    pub fn path(&self) -> String {
        match self {
            Destination::Landing => "/".to_string(),
            Destination::Rooms => "/rooms".to_string(),
            Destination::Room(id) => format!("/rooms/{id}"),
        }
    }
}

/// Whether `path` shows the room `id` itself or one of its sub-pages.
pub fn is_viewing_room(path: &str, id: RoomId) -> bool {
    let room_path = Destination::Room(id).path();
    match path.strip_prefix(room_path.as_str()) {
        Some(rest) => rest.is_empty() || rest.starts_with('/'),
        None => false,
    }
}
