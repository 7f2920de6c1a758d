//! Test factory for creating Serenity GuildChannel objects.

use serde_json::{json, Value};
use serenity::all::GuildChannel;

/// Discord channel type for text channels.
const CHANNEL_TYPE_TEXT: u8 = 0;

/// Discord channel type for voice channels.
const CHANNEL_TYPE_VOICE: u8 = 2;

/// Creates a test voice channel.
///
/// # Arguments
/// - `guild_id` - Discord guild ID the channel belongs to
/// - `channel_id` - Discord channel ID (snowflake)
/// - `name` - Channel name
/// - `position` - Position in the guild's channel list
/// - `user_limit` - Member cap, `None` for uncapped
///
/// # Returns
/// - `GuildChannel` - A valid voice channel for testing
///
/// # Panics
/// - If the JSON cannot be deserialized into a GuildChannel (indicates invalid test data)
pub fn create_test_voice_channel(
    guild_id: u64,
    channel_id: u64,
    name: &str,
    position: u16,
    user_limit: Option<u32>,
) -> GuildChannel {
    let mut channel = base_channel_json(guild_id, channel_id, name, position, CHANNEL_TYPE_VOICE);
    channel["bitrate"] = json!(64000);
    channel["user_limit"] = json!(user_limit.unwrap_or(0));
    channel["rtc_region"] = Value::Null;

    serde_json::from_value(channel)
        .expect("Failed to create test voice channel - invalid JSON structure")
}

/// Creates a test text channel.
///
/// # Arguments
/// - `guild_id` - Discord guild ID the channel belongs to
/// - `channel_id` - Discord channel ID (snowflake)
/// - `name` - Channel name
/// - `position` - Position in the guild's channel list
///
/// # Returns
/// - `GuildChannel` - A valid text channel for testing
///
/// # Panics
/// - If the JSON cannot be deserialized into a GuildChannel (indicates invalid test data)
pub fn create_test_text_channel(
    guild_id: u64,
    channel_id: u64,
    name: &str,
    position: u16,
) -> GuildChannel {
    let mut channel = base_channel_json(guild_id, channel_id, name, position, CHANNEL_TYPE_TEXT);
    channel["topic"] = Value::Null;
    channel["rate_limit_per_user"] = json!(0);
    channel["last_message_id"] = Value::Null;

    serde_json::from_value(channel)
        .expect("Failed to create test text channel - invalid JSON structure")
}

/// Fields shared by every guild channel kind.
fn base_channel_json(guild_id: u64, channel_id: u64, name: &str, position: u16, kind: u8) -> Value {
    json!({
        "id": channel_id.to_string(),
        "guild_id": guild_id.to_string(),
        "type": kind,
        "name": name,
        "position": position,
        "permission_overwrites": [],
        "nsfw": false,
        "parent_id": null,
        "flags": 0,
    })
}
