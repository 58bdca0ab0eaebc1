//! Authenticated session and joined-room directory.

use banter_core::{Identity, Room};

/// The authenticated identity and the rooms it has joined.
///
/// The directory keeps server response order; it is replaced wholesale
/// on refresh and appended to optimistically after a create or join.
#[derive(Debug, Default, Clone)]
pub struct Session {
    identity: Option<Identity>,
    rooms: Vec<Room>,
}

impl Session {
    /// Create an unauthenticated session.
    pub fn new() -> Self {
        Self::default()
    }

    /// The current identity. `None` before login and after logout.
    pub fn identity(&self) -> Option<&Identity> {
        self.identity.as_ref()
    }

    /// Whether a login has completed.
    pub fn is_authenticated(&self) -> bool {
        self.identity.is_some()
    }

    /// Install a fresh identity and directory after login.
    pub fn begin(&mut self, identity: Identity, rooms: Vec<Room>) {
        self.identity = Some(identity);
        self.rooms = rooms;
    }

    /// Invalidate the identity and forget the directory.
    pub fn end(&mut self) {
        self.identity = None;
        self.rooms.clear();
    }

    /// Joined rooms in server order.
    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    /// Replace the directory wholesale with a refreshed copy.
    pub fn set_rooms(&mut self, rooms: Vec<Room>) {
        self.rooms = rooms;
    }

    /// Append a room after a successful create or join.
    pub fn add_room(&mut self, room: Room) {
        self.rooms.push(room);
    }

    /// Room under a list cursor, if any.
    pub fn room_at(&self, index: usize) -> Option<&Room> {
        self.rooms.get(index)
    }
}
