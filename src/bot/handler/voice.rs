//! Voice state handler pushing occupancy into the room tracker.
//!
//! Serenity updates its cached voice states before dispatching the event, so the
//! member count of every affected channel is read back from the cache. Both the
//! channel a member left and the one they joined are refreshed.

use dioxus_logger::tracing;
use serenity::all::{ChannelId, Context, VoiceState};

use crate::bot::{
    adapter::{count_voice_members, user_count_for},
    handler::Handler,
};

/// Returns the channels whose occupancy may have changed, without duplicates.
///
/// A member toggling mute stays in the same channel, which is then refreshed once.
pub fn affected_channels(old: Option<&VoiceState>, new: &VoiceState) -> Vec<ChannelId> {
    let mut channels: Vec<ChannelId> = Vec::with_capacity(2);

    for channel_id in [old.and_then(|state| state.channel_id), new.channel_id]
        .into_iter()
        .flatten()
    {
        if !channels.contains(&channel_id) {
            channels.push(channel_id);
        }
    }

    channels
}

/// Handles the voice_state_update event.
///
/// # Arguments
/// - `handler` - Event handler holding the shared state
/// - `ctx` - Discord context for reading cached voice states
/// - `old` - Previous voice state of the member if it was cached
/// - `new` - Current voice state of the member
pub async fn handle_voice_state_update(
    handler: &Handler,
    ctx: Context,
    old: Option<VoiceState>,
    new: VoiceState,
) {
    if new.guild_id != Some(handler.guild_id) {
        return;
    }

    let channels = affected_channels(old.as_ref(), &new);
    if channels.is_empty() {
        return;
    }

    let counts: Vec<(ChannelId, usize)> = match ctx.cache.guild(handler.guild_id) {
        Some(guild) => channels
            .iter()
            .map(|channel_id| {
                (
                    *channel_id,
                    count_voice_members(&guild.voice_states, *channel_id),
                )
            })
            .collect(),
        None => {
            tracing::warn!(
                "Guild {} missing from cache, dropping voice state update",
                handler.guild_id
            );
            return;
        }
    };

    for (channel_id, members) in counts {
        let room_id = channel_id.to_string();

        let count = match user_count_for(channel_id, members) {
            Ok(count) => count,
            Err(e) => {
                tracing::error!("Rejected voice member count: {}", e);
                continue;
            }
        };

        match handler
            .state
            .with_rooms_mut(|rooms| rooms.update_room_user_count(&room_id, count))
            .await
        {
            Some(Ok(())) => {}
            Some(Err(e)) => {
                tracing::error!("Failed to update user count of room {}: {}", room_id, e);
            }
            None => {
                tracing::debug!("Trackers idle, ignoring voice update for {}", room_id);
                return;
            }
        }
    }
}
