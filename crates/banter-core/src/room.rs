//! Room directory entries.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A chat room as known to the directory.
///
/// Rooms are value-identical by `id`. The name may change server-side;
/// the client's copy is refreshed only by re-fetching the directory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Room {
    /// Globally unique, stable room id.
    pub id: String,
    /// Display name.
    pub name: String,
    /// User id of the room's creator.
    pub creator_id: String,
    /// Server-assigned creation time.
    pub created_at: DateTime<Utc>,
    /// Tombstone: set once the room is deleted. A deleted room stays in
    /// any listing the client already holds, it is just no longer
    /// joinable.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deleted_at: Option<DateTime<Utc>>,
}

impl Room {
    /// Whether this room carries a deletion tombstone.
    pub fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }
}
