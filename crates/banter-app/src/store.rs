//! Per-room message history.

use std::collections::HashMap;

use banter_core::Message;

/// Ordered message buffers, one per room.
///
/// Append-only from the client's perspective: order is arrival order,
/// which is chronological because the server assigns timestamps and the
/// transport preserves order. Buffers are created lazily and never
/// pruned.
#[derive(Debug, Default, Clone)]
pub struct HistoryStore {
    rooms: HashMap<String, Vec<Message>>,
}

impl HistoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a message to its room's buffer.
    ///
    /// A message with an empty body is a no-op: it is never stored and
    /// never creates a buffer.
    pub fn append(&mut self, message: Message) {
        if message.body.is_empty() {
            return;
        }
        self.rooms.entry(message.room_id.clone()).or_default().push(message);
    }

    /// Replace a room's buffer wholesale with a fetched history.
    ///
    /// The fetch result is authoritative at call time: live messages
    /// that raced the fetch into the buffer are dropped. Empty-body
    /// entries are filtered on the way in.
    pub fn load(&mut self, room_id: impl Into<String>, mut messages: Vec<Message>) {
        messages.retain(|m| !m.body.is_empty());
        self.rooms.insert(room_id.into(), messages);
    }

    /// Read-only view of a room's buffer, oldest first.
    pub fn messages(&self, room_id: &str) -> &[Message] {
        self.rooms.get(room_id).map_or(&[], Vec::as_slice)
    }

    /// Drop everything (used on logout).
    pub fn clear(&mut self) {
        self.rooms.clear();
    }
}

#[cfg(test)]
mod tests {
    use banter_core::{Identity, Message};

    use super::*;

    fn sender() -> Identity {
        Identity { token: "t".into(), username: "alice".into(), user_id: "u1".into() }
    }

    fn msg(room: &str, body: &str) -> Message {
        Message::outgoing(room, &sender(), body)
    }

    #[test]
    fn append_preserves_arrival_order() {
        let mut store = HistoryStore::new();
        store.append(msg("r1", "one"));
        store.append(msg("r1", "two"));
        store.append(msg("r1", "three"));

        let bodies: Vec<_> = store.messages("r1").iter().map(|m| m.body.as_str()).collect();
        assert_eq!(bodies, ["one", "two", "three"]);
    }

    #[test]
    fn empty_body_is_a_no_op() {
        let mut store = HistoryStore::new();
        store.append(msg("r1", "hello"));
        store.append(msg("r1", ""));

        assert_eq!(store.messages("r1").len(), 1);
    }

    #[test]
    fn empty_body_never_creates_a_buffer() {
        let mut store = HistoryStore::new();
        store.append(msg("r1", ""));

        assert!(store.messages("r1").is_empty());
        assert!(store.rooms.is_empty());
    }

    #[test]
    fn load_replaces_wholesale() {
        let mut store = HistoryStore::new();
        store.append(msg("r1", "live"));

        store.load("r1", vec![msg("r1", "old one"), msg("r1", "old two")]);

        let bodies: Vec<_> = store.messages("r1").iter().map(|m| m.body.as_str()).collect();
        assert_eq!(bodies, ["old one", "old two"]);
    }

    #[test]
    fn load_filters_empty_bodies() {
        let mut store = HistoryStore::new();
        store.load("r1", vec![msg("r1", ""), msg("r1", "kept")]);

        assert_eq!(store.messages("r1").len(), 1);
    }

    #[test]
    fn rooms_are_independent() {
        let mut store = HistoryStore::new();
        store.append(msg("r1", "in r1"));
        store.append(msg("r2", "in r2"));

        assert_eq!(store.messages("r1").len(), 1);
        assert_eq!(store.messages("r2").len(), 1);
        assert!(store.messages("r3").is_empty());
    }
}
