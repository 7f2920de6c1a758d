//! Test factory for creating Serenity Guild objects.
//!
//! Guilds are built by deserializing JSON shaped like a gateway `GUILD_CREATE`
//! payload, so channels and voice states end up keyed the way serenity keys them.

use serenity::all::{Guild, GuildChannel, VoiceState};

/// Creates a test Serenity Guild holding the given channels and voice states.
///
/// # Arguments
/// - `guild_id` - Discord guild ID (snowflake)
/// - `name` - Guild name
/// - `channels` - Guild channels, typically from the `channel` factories
/// - `voice_states` - Connected members, typically from `create_test_voice_state`
///
/// # Returns
/// - `Guild` - A valid Serenity Guild struct for testing
///
/// # Panics
/// - If the JSON cannot be deserialized into a Guild (indicates invalid test data)
///
/// # Examples
///
/// ```rust,ignore
/// use test_utils::serenity::{channel::create_test_voice_channel, guild::create_test_guild_with_channels};
///
/// let guild = create_test_guild_with_channels(
///     123456789,
///     "Test Guild",
///     vec![create_test_voice_channel(123456789, 201, "Squad", 0, Some(5))],
///     Vec::new(),
/// );
/// assert_eq!(guild.channels.len(), 1);
/// ```
pub fn create_test_guild_with_channels(
    guild_id: u64,
    name: &str,
    channels: Vec<GuildChannel>,
    voice_states: Vec<VoiceState>,
) -> Guild {
    let channels = serde_json::to_value(channels)
        .expect("Failed to serialize test channels - invalid channel data");
    let voice_states = serde_json::to_value(voice_states)
        .expect("Failed to serialize test voice states - invalid voice state data");

    serde_json::from_value(serde_json::json!({
        "id": guild_id.to_string(),
        "name": name,
        "icon": null,
        "icon_hash": null,
        "owner_id": "100000000000000000",
        "afk_timeout": 300,
        "verification_level": 0,
        "default_message_notifications": 0,
        "explicit_content_filter": 0,
        "roles": [],
        "emojis": [],
        "stickers": [],
        "features": [],
        "mfa_level": 0,
        "system_channel_flags": 0,
        "premium_tier": 0,
        "premium_subscription_count": 0,
        "premium_progress_bar_enabled": false,
        "preferred_locale": "en-US",
        "nsfw_level": 0,
        "joined_at": "2020-01-01T00:00:00.000000+00:00",
        "large": false,
        "member_count": 100,
        "voice_states": voice_states,
        "channels": channels,
        "threads": [],
        "presences": [],
        "max_presences": 25000,
        "max_members": 100000,
        "unavailable": false,
        "members": [],
        "stage_instances": [],
        "guild_scheduled_events": [],
    }))
    .expect("Failed to create test guild - invalid JSON structure")
}
