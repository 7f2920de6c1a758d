//! Channel event handler keeping room details current.
//!
//! Only voice channels of the tracked guild matter. Channel creation and deletion
//! are not handled: the set of rooms is fixed once the trackers are seeded.

use dioxus_logger::tracing;
use serenity::all::{ChannelType, Context, GuildChannel};

use crate::bot::{adapter::room_details_from_channel, handler::Handler};

/// Handles the channel_update event when a channel is updated in a guild.
///
/// Refreshes the name, member cap and position of the matching room.
///
/// # Arguments
/// - `handler` - Event handler holding the shared state
/// - `_ctx` - Discord context (unused, required by event handler signature)
/// - `_old` - Previous channel state if available (unused)
/// - `new` - Updated channel state from Discord
pub async fn handle_channel_update(
    handler: &Handler,
    _ctx: Context,
    _old: Option<GuildChannel>,
    new: GuildChannel,
) {
    let channel = new;

    if channel.guild_id != handler.guild_id || channel.kind != ChannelType::Voice {
        return;
    }

    let room_id = channel.id.to_string();
    let details = room_details_from_channel(&channel);

    match handler
        .state
        .with_rooms_mut(|rooms| rooms.update_room_details(&room_id, details))
        .await
    {
        Some(Ok(())) => {
            tracing::debug!("Refreshed details of room {} ({})", room_id, channel.name);
        }
        Some(Err(e)) => {
            tracing::error!("Failed to refresh room {}: {}", room_id, e);
        }
        None => {
            tracing::debug!("Trackers idle, ignoring update of channel {}", room_id);
        }
    }
}
