//! Capabilities the trackers and the broadcast loop need from the platform.
//!
//! The core only depends on these traits. Serenity-backed implementations live in
//! `bot::adapter` and in-memory fakes in `test_support`.

use serenity::async_trait;

use crate::{
    error::AppError,
    model::{notification::NotificationChannel, room::Room},
};

/// Lists the voice channels of a guild as occupancy snapshots.
#[async_trait]
pub trait VoiceChannelEnumerator: Send + Sync {
    /// Returns one `Room` per voice channel in the guild.
    ///
    /// # Arguments
    /// - `guild_id` - Discord's unique identifier for the guild
    ///
    /// # Returns
    /// - `Ok(Vec<Room>)` - Snapshot of every voice channel, in no particular order
    /// - `Err(AppError)` - Guild is unavailable or a channel could not be converted
    async fn enumerate(&self, guild_id: u64) -> Result<Vec<Room>, AppError>;
}

/// Delivers plain message content to a text channel.
#[async_trait]
pub trait TextChannelSender: Send + Sync {
    /// Sends `content` to the channel. Each call succeeds or fails on its own.
    async fn send(&self, channel_id: &str, content: &str) -> Result<(), AppError>;
}

/// Looks up a text channel by id.
#[async_trait]
pub trait TextChannelResolver: Send + Sync {
    /// # Returns
    /// - `Ok(Some(NotificationChannel))` - Channel exists and is a text channel
    /// - `Ok(None)` - No text channel with that id
    /// - `Err(AppError)` - Malformed id or the lookup itself failed
    async fn resolve(&self, channel_id: &str) -> Result<Option<NotificationChannel>, AppError>;
}

/// Renders the broadcast body for a set of available rooms.
pub trait BroadcastFormatter: Send + Sync {
    fn format_available_rooms(&self, rooms: &[Room]) -> String;
}
