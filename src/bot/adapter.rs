//! Serenity-backed implementations of the tracker capabilities.
//!
//! Conversions from serenity models into domain snapshots are plain functions so
//! they can be tested without a live gateway connection; the adapter structs only
//! add cache and HTTP access around them.

use serenity::{
    all::{
        Cache, ChannelId, ChannelType, CreateMessage, Guild, GuildChannel, GuildId, UserId,
        VoiceState,
    },
    async_trait,
    http::Http,
};
use std::collections::HashMap;
use std::sync::Arc;

use crate::{
    capability::{TextChannelResolver, TextChannelSender, VoiceChannelEnumerator},
    error::{internal::InternalError, tracker::RoomError, AppError},
    model::{
        notification::NotificationChannel,
        room::{Room, RoomDetails},
    },
    util::parse::parse_snowflake,
};

/// Counts the members connected to a voice channel.
///
/// # Arguments
/// - `voice_states` - Voice states of a guild keyed by user
/// - `channel_id` - Voice channel to count members of
pub fn count_voice_members(voice_states: &HashMap<UserId, VoiceState>, channel_id: ChannelId) -> usize {
    voice_states
        .values()
        .filter(|voice_state| voice_state.channel_id == Some(channel_id))
        .count()
}

/// Converts an observed member count into a tracked user count.
pub fn user_count_for(channel_id: ChannelId, members: usize) -> Result<u32, RoomError> {
    u32::try_from(members).map_err(|_| RoomError::CountOutOfRange {
        room_id: channel_id.to_string(),
        count: members,
    })
}

/// Builds a room snapshot from a voice channel and its member count.
///
/// A missing user limit means the channel is uncapped and maps to `0`.
pub fn room_from_channel(channel: &GuildChannel, members: usize) -> Result<Room, RoomError> {
    let details = room_details_from_channel(channel);

    Ok(Room {
        id: channel.id.to_string(),
        name: details.name,
        user_count: user_count_for(channel.id, members)?,
        user_limit: details.user_limit,
        position: details.position,
    })
}

/// Extracts the display properties tracked for a voice channel.
pub fn room_details_from_channel(channel: &GuildChannel) -> RoomDetails {
    RoomDetails {
        name: channel.name.clone(),
        user_limit: channel.user_limit.unwrap_or(0),
        position: i32::from(channel.position),
    }
}

/// Builds room snapshots for every voice channel of a guild.
///
/// Member counts come from the guild's voice states. Stage channels are not rooms.
pub fn rooms_from_guild(guild: &Guild) -> Result<Vec<Room>, RoomError> {
    guild
        .channels
        .values()
        .filter(|channel| channel.kind == ChannelType::Voice)
        .map(|channel| {
            room_from_channel(channel, count_voice_members(&guild.voice_states, channel.id))
        })
        .collect()
}

/// Converts a text channel into a notification channel; other kinds yield `None`.
pub fn notification_channel_from(channel: &GuildChannel) -> Option<NotificationChannel> {
    if channel.kind != ChannelType::Text {
        return None;
    }

    Some(NotificationChannel::new(
        channel.id.to_string(),
        channel.name.clone(),
    ))
}

fn guild_id_from(guild_id: u64) -> Result<GuildId, AppError> {
    if guild_id == 0 {
        return Err(InternalError::ZeroId {
            value: guild_id.to_string(),
        }
        .into());
    }
    Ok(GuildId::new(guild_id))
}

/// Enumerates voice channels from serenity's guild cache.
pub struct CacheVoiceChannelEnumerator {
    cache: Arc<Cache>,
}

impl CacheVoiceChannelEnumerator {
    pub fn new(cache: Arc<Cache>) -> Self {
        Self { cache }
    }
}

#[async_trait]
impl VoiceChannelEnumerator for CacheVoiceChannelEnumerator {
    async fn enumerate(&self, guild_id: u64) -> Result<Vec<Room>, AppError> {
        let guild_id = guild_id_from(guild_id)?;

        let rooms = match self.cache.guild(guild_id) {
            Some(guild) => rooms_from_guild(&guild),
            None => {
                return Err(AppError::NotFound(format!(
                    "Guild {} is not in the cache",
                    guild_id
                )))
            }
        };

        Ok(rooms?)
    }
}

/// Sends plain messages through Discord's HTTP API.
pub struct HttpTextChannelSender {
    http: Arc<Http>,
}

impl HttpTextChannelSender {
    pub fn new(http: Arc<Http>) -> Self {
        Self { http }
    }
}

#[async_trait]
impl TextChannelSender for HttpTextChannelSender {
    async fn send(&self, channel_id: &str, content: &str) -> Result<(), AppError> {
        let channel_id = ChannelId::new(parse_snowflake(channel_id)?);
        let message = CreateMessage::new().content(content);

        channel_id.send_message(&self.http, message).await?;

        Ok(())
    }
}

/// Resolves text channels of one guild, cache first with an HTTP fallback.
pub struct CacheTextChannelResolver {
    cache: Arc<Cache>,
    http: Arc<Http>,
    guild_id: GuildId,
}

impl CacheTextChannelResolver {
    pub fn new(cache: Arc<Cache>, http: Arc<Http>, guild_id: GuildId) -> Self {
        Self {
            cache,
            http,
            guild_id,
        }
    }
}

#[async_trait]
impl TextChannelResolver for CacheTextChannelResolver {
    async fn resolve(&self, channel_id: &str) -> Result<Option<NotificationChannel>, AppError> {
        let channel_id = ChannelId::new(parse_snowflake(channel_id)?);

        // Outer None: guild not cached, ask the API instead
        let cached = self
            .cache
            .guild(self.guild_id)
            .map(|guild| guild.channels.get(&channel_id).cloned());

        let channel = match cached {
            Some(channel) => channel,
            None => self.http.get_channel(channel_id).await?.guild(),
        };

        Ok(channel
            .filter(|channel| channel.guild_id == self.guild_id)
            .and_then(|channel| notification_channel_from(&channel)))
    }
}
