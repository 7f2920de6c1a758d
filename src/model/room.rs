//! Voice channel occupancy snapshot.

/// Occupancy snapshot of one tracked voice channel.
///
/// A `user_limit` of zero means the channel has no member cap.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Room {
    /// Discord voice channel ID, kept as an opaque string.
    pub id: String,
    /// Channel display name.
    pub name: String,
    /// Members currently connected to the channel.
    pub user_count: u32,
    /// Member cap of the channel, `0` when unlimited.
    pub user_limit: u32,
    /// Channel position in the guild's channel list (for display ordering).
    pub position: i32,
}

impl Room {
    /// Whether the room is worth recommending: someone is in it and it has space left.
    pub fn is_available(&self) -> bool {
        self.user_count >= 1 && !self.is_full()
    }

    /// Whether the room has reached its member cap. Unlimited rooms are never full.
    pub fn is_full(&self) -> bool {
        self.user_limit > 0 && self.user_count >= self.user_limit
    }
}

/// Mutable display properties of a room, refreshed when the channel is edited.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoomDetails {
    pub name: String,
    pub user_limit: u32,
    pub position: i32,
}
