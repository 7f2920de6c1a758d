//! Test factory for creating Serenity VoiceState objects.

use serenity::all::VoiceState;

/// Creates a test voice state for a member.
///
/// # Arguments
/// - `guild_id` - Discord guild ID
/// - `user_id` - Discord user ID of the member
/// - `channel_id` - Voice channel the member is connected to, `None` when disconnected
///
/// # Returns
/// - `VoiceState` - A valid, unmuted voice state for testing
///
/// # Panics
/// - If the JSON cannot be deserialized into a VoiceState (indicates invalid test data)
pub fn create_test_voice_state(guild_id: u64, user_id: u64, channel_id: Option<u64>) -> VoiceState {
    serde_json::from_value(serde_json::json!({
        "guild_id": guild_id.to_string(),
        "channel_id": channel_id.map(|id| id.to_string()),
        "user_id": user_id.to_string(),
        "session_id": format!("session-{}", user_id),
        "deaf": false,
        "mute": false,
        "self_deaf": false,
        "self_mute": false,
        "self_stream": false,
        "self_video": false,
        "suppress": false,
        "request_to_speak_timestamp": null,
    }))
    .expect("Failed to create test voice state - invalid JSON structure")
}
