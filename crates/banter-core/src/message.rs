//! Chat message wire format.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::Identity;

/// Message kind tag.
///
/// Currently a single variant; the tag travels on the wire so new kinds
/// can be added server-side without breaking old clients.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageKind {
    /// Plain chat text.
    Chat,
}

/// A single chat message.
///
/// Outgoing messages carry an empty `id` and no `sent_at`; both are
/// assigned by the server and present on every delivered copy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    /// Server-assigned id. Empty until acknowledged.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub id: String,
    /// Kind tag.
    #[serde(rename = "type")]
    pub kind: MessageKind,
    /// Sender's user id.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub user_id: String,
    /// Sender's display name.
    pub sender_username: String,
    /// Message text. An empty body is a no-op and is never stored.
    #[serde(rename = "content")]
    pub body: String,
    /// Server-assigned creation time. Absent until acknowledged.
    #[serde(rename = "created_at", default, skip_serializing_if = "Option::is_none")]
    pub sent_at: Option<DateTime<Utc>>,
    /// Id of the room this message belongs to.
    pub room_id: String,
}

impl Message {
    /// Build an outgoing chat message for `room_id`, stamped with the
    /// sender's identity but no id or timestamp.
    pub fn outgoing(room_id: impl Into<String>, sender: &Identity, body: impl Into<String>) -> Self {
        Self {
            id: String::new(),
            kind: MessageKind::Chat,
            user_id: sender.user_id.clone(),
            sender_username: sender.username.clone(),
            body: body.into(),
            sent_at: None,
            room_id: room_id.into(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn identity() -> Identity {
        Identity { token: "t".into(), username: "alice".into(), user_id: "u1".into() }
    }

    #[test]
    fn outgoing_omits_server_fields() {
        let msg = Message::outgoing("r1", &identity(), "hi");
        let json = serde_json::to_value(&msg).unwrap();

        assert!(json.get("id").is_none());
        assert!(json.get("created_at").is_none());
        assert_eq!(json.get("type").and_then(|v| v.as_str()), Some("chat"));
        assert_eq!(json.get("content").and_then(|v| v.as_str()), Some("hi"));
        assert_eq!(json.get("room_id").and_then(|v| v.as_str()), Some("r1"));
    }

    #[test]
    fn delivered_message_round_trips() {
        let raw = r#"{
            "id": "m1",
            "type": "chat",
            "user_id": "u2",
            "sender_username": "bob",
            "content": "hello",
            "created_at": "2024-05-01T12:30:00Z",
            "room_id": "r1"
        }"#;

        let msg: Message = serde_json::from_str(raw).unwrap();
        assert_eq!(msg.id, "m1");
        assert_eq!(msg.kind, MessageKind::Chat);
        assert_eq!(msg.sender_username, "bob");
        assert!(msg.sent_at.is_some());
    }

    #[test]
    fn unacknowledged_fields_default() {
        let raw = r#"{
            "type": "chat",
            "sender_username": "bob",
            "content": "hello",
            "room_id": "r1"
        }"#;

        let msg: Message = serde_json::from_str(raw).unwrap();
        assert!(msg.id.is_empty());
        assert!(msg.user_id.is_empty());
        assert!(msg.sent_at.is_none());
    }
}
