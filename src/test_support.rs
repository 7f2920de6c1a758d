//! In-memory capability fakes shared by the crate's unit tests.

use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

use serenity::async_trait;

use crate::{
    capability::{BroadcastFormatter, TextChannelResolver, TextChannelSender, VoiceChannelEnumerator},
    error::AppError,
    model::{notification::NotificationChannel, room::Room},
};

/// Builds a room with the given occupancy; the name is derived from the id.
pub fn room(id: &str, user_count: u32, user_limit: u32, position: i32) -> Room {
    Room {
        id: id.to_string(),
        name: format!("Room {}", id),
        user_count,
        user_limit,
        position,
    }
}

/// Returns the same rooms for every guild, or fails for a guild in `unavailable`.
#[derive(Default)]
pub struct StaticVoiceChannelEnumerator {
    pub rooms: Vec<Room>,
    pub unavailable: HashSet<u64>,
}

impl StaticVoiceChannelEnumerator {
    pub fn new(rooms: Vec<Room>) -> Self {
        Self {
            rooms,
            unavailable: HashSet::new(),
        }
    }
}

#[async_trait]
impl VoiceChannelEnumerator for StaticVoiceChannelEnumerator {
    async fn enumerate(&self, guild_id: u64) -> Result<Vec<Room>, AppError> {
        if self.unavailable.contains(&guild_id) {
            return Err(AppError::NotFound(format!("Guild {} not found", guild_id)));
        }
        Ok(self.rooms.clone())
    }
}

/// Records every send and fails for channel ids listed in `failing`.
#[derive(Default)]
pub struct RecordingSender {
    pub sent: Mutex<Vec<(String, String)>>,
    pub failing: HashSet<String>,
}

impl RecordingSender {
    pub fn failing_for(ids: &[&str]) -> Self {
        Self {
            sent: Mutex::new(Vec::new()),
            failing: ids.iter().map(|id| id.to_string()).collect(),
        }
    }

    pub fn sent_channel_ids(&self) -> Vec<String> {
        self.sent
            .lock()
            .unwrap()
            .iter()
            .map(|(id, _)| id.clone())
            .collect()
    }

    pub fn sent_messages(&self) -> Vec<(String, String)> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl TextChannelSender for RecordingSender {
    async fn send(&self, channel_id: &str, content: &str) -> Result<(), AppError> {
        if self.failing.contains(channel_id) {
            return Err(AppError::NotFound(format!(
                "Channel {} not found",
                channel_id
            )));
        }
        self.sent
            .lock()
            .unwrap()
            .push((channel_id.to_string(), content.to_string()));
        Ok(())
    }
}

/// Resolves channel ids from a fixed id -> name table.
#[derive(Default)]
pub struct StaticResolver {
    pub channels: HashMap<String, String>,
}

impl StaticResolver {
    pub fn new(channels: &[(&str, &str)]) -> Self {
        Self {
            channels: channels
                .iter()
                .map(|(id, name)| (id.to_string(), name.to_string()))
                .collect(),
        }
    }
}

#[async_trait]
impl TextChannelResolver for StaticResolver {
    async fn resolve(&self, channel_id: &str) -> Result<Option<NotificationChannel>, AppError> {
        Ok(self
            .channels
            .get(channel_id)
            .map(|name| NotificationChannel::new(channel_id, name.clone())))
    }
}

/// Joins room ids so tests can assert on exactly what was broadcast.
pub struct IdListFormatter;

impl BroadcastFormatter for IdListFormatter {
    fn format_available_rooms(&self, rooms: &[Room]) -> String {
        rooms
            .iter()
            .map(|room| room.id.as_str())
            .collect::<Vec<_>>()
            .join(",")
    }
}
