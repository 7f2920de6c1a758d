//! Contract violations reported by the in-memory trackers.
//!
//! Not-found conditions (updating an untracked room, removing a channel that was
//! never subscribed) are deliberately absent here: they are benign no-ops.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RoomError {
    /// Room ids are opaque but never empty.
    #[error("Room id must not be empty")]
    EmptyId,

    /// An observed member count does not fit the tracked count type.
    #[error("User count {count} for room {room_id} is out of range")]
    CountOutOfRange {
        /// Room the count was observed for
        room_id: String,
        /// The raw observed count
        count: usize,
    },
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NotificationError {
    /// Notification channel ids are opaque but never empty.
    #[error("Notification channel id must not be empty")]
    EmptyId,
}
