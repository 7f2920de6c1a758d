//! Voice room occupancy tracker.
//!
//! `RoomManager` is the single source of truth for how many members are in each
//! voice channel of the tracked guild, and decides which rooms are worth
//! recommending. Rooms are seeded once from a `VoiceChannelEnumerator` and only
//! updated afterwards; channels created while the bot runs are not picked up.

use dioxus_logger::tracing;
use std::collections::HashMap;

use crate::{
    capability::VoiceChannelEnumerator,
    error::{tracker::RoomError, AppError},
    model::room::{Room, RoomDetails},
};

/// Tracks occupancy of a fixed set of voice rooms keyed by channel id.
#[derive(Debug, Default)]
pub struct RoomManager {
    rooms: HashMap<String, Room>,
}

impl RoomManager {
    /// Creates a manager tracking the provided rooms.
    ///
    /// Rooms with an empty id are skipped. When the same id appears more than once
    /// the first occurrence is kept. Both cases are logged as warnings since they
    /// point at a misbehaving enumerator.
    ///
    /// # Arguments
    /// - `rooms` - Initial room snapshots
    ///
    /// # Returns
    /// - `RoomManager` - Manager tracking every valid, distinct room
    pub fn new(rooms: impl IntoIterator<Item = Room>) -> Self {
        let mut tracked = HashMap::new();

        for room in rooms {
            if room.id.is_empty() {
                tracing::warn!("Skipping voice room '{}' with an empty id", room.name);
                continue;
            }
            if tracked.contains_key(&room.id) {
                tracing::warn!("Skipping duplicate voice room {} ({})", room.id, room.name);
                continue;
            }
            tracked.insert(room.id.clone(), room);
        }

        Self { rooms: tracked }
    }

    /// Creates a manager seeded with every voice channel of a guild.
    ///
    /// # Arguments
    /// - `enumerator` - Capability listing the guild's voice channels
    /// - `guild_id` - Discord's unique identifier for the guild (u64)
    ///
    /// # Returns
    /// - `Ok(RoomManager)` - Manager tracking the guild's voice channels
    /// - `Err(AppError)` - The enumerator failed to list the channels
    pub async fn from_enumerator<E>(enumerator: &E, guild_id: u64) -> Result<Self, AppError>
    where
        E: VoiceChannelEnumerator + ?Sized,
    {
        let rooms = enumerator.enumerate(guild_id).await?;
        let manager = Self::new(rooms);

        tracing::info!(
            "Tracking {} voice rooms for guild {}",
            manager.len(),
            guild_id
        );

        Ok(manager)
    }

    /// Returns a snapshot of every tracked room ordered by channel position.
    ///
    /// Rooms sharing a position are ordered by id so the listing is stable.
    pub fn list_tracked_rooms(&self) -> Vec<Room> {
        let mut rooms: Vec<Room> = self.rooms.values().cloned().collect();
        rooms.sort_by(|a, b| a.position.cmp(&b.position).then_with(|| a.id.cmp(&b.id)));
        rooms
    }

    /// Returns up to `limit` rooms worth recommending.
    ///
    /// A room qualifies when it has at least one member and is not full. Rooms
    /// closest to full come first since they are the best place to jump in; ties
    /// are broken by channel position, then id.
    ///
    /// # Arguments
    /// - `limit` - Maximum number of rooms to return, `0` returns nothing
    ///
    /// # Returns
    /// - `Vec<Room>` - Available rooms, most occupied first
    pub fn list_available_rooms(&self, limit: usize) -> Vec<Room> {
        if limit == 0 {
            return Vec::new();
        }

        let mut rooms: Vec<Room> = self
            .rooms
            .values()
            .filter(|room| room.is_available())
            .cloned()
            .collect();

        rooms.sort_by(|a, b| {
            b.user_count
                .cmp(&a.user_count)
                .then_with(|| a.position.cmp(&b.position))
                .then_with(|| a.id.cmp(&b.id))
        });
        rooms.truncate(limit);

        rooms
    }

    /// Replaces the member count of a tracked room.
    ///
    /// Counts for untracked rooms are ignored: voice events can reference channels
    /// the tracker never saw, and this path never creates rooms.
    ///
    /// # Arguments
    /// - `id` - Voice channel id of the room
    /// - `count` - Members currently connected to the channel
    ///
    /// # Returns
    /// - `Ok(())` - Count applied, or room not tracked
    /// - `Err(RoomError::EmptyId)` - Caller passed an empty id
    pub fn update_room_user_count(&mut self, id: &str, count: u32) -> Result<(), RoomError> {
        if id.is_empty() {
            return Err(RoomError::EmptyId);
        }

        match self.rooms.get_mut(id) {
            Some(room) => {
                if room.user_count != count {
                    tracing::debug!(
                        "Room {} ({}) user count {} -> {}",
                        room.id,
                        room.name,
                        room.user_count,
                        count
                    );
                }
                room.user_count = count;
            }
            None => {
                tracing::debug!("Ignoring user count update for untracked room {}", id);
            }
        }

        Ok(())
    }

    /// Refreshes the display properties of a tracked room after a channel edit.
    ///
    /// Same not-found semantics as `update_room_user_count`. The member count is
    /// left untouched.
    ///
    /// # Arguments
    /// - `id` - Voice channel id of the room
    /// - `details` - New name, member cap and position
    ///
    /// # Returns
    /// - `Ok(())` - Details applied, or room not tracked
    /// - `Err(RoomError::EmptyId)` - Caller passed an empty id
    pub fn update_room_details(&mut self, id: &str, details: RoomDetails) -> Result<(), RoomError> {
        if id.is_empty() {
            return Err(RoomError::EmptyId);
        }

        let Some(room) = self.rooms.get_mut(id) else {
            tracing::debug!("Ignoring details update for untracked room {}", id);
            return Ok(());
        };

        room.name = details.name;
        room.user_limit = details.user_limit;
        room.position = details.position;

        Ok(())
    }

    /// Returns a snapshot of one tracked room.
    pub fn get(&self, id: &str) -> Option<Room> {
        self.rooms.get(id).cloned()
    }

    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }
}
