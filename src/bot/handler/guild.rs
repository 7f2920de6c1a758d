//! Guild availability handler that initialises the trackers.
//!
//! The `guild_create` event fires for every guild on startup, when the bot joins a
//! guild and after outages. Only the configured guild is used, and only its first
//! availability activates the trackers; later replays keep the live state.

use dioxus_logger::tracing;
use serenity::all::{Context, Guild};

use crate::{
    bot::{
        adapter::{CacheTextChannelResolver, CacheVoiceChannelEnumerator},
        handler::Handler,
    },
    service::{notification::NotificationManager, room::RoomManager},
    state::Managers,
};

/// Handles the guild_create event when a guild becomes available.
///
/// Seeds the room tracker from the cached voice channels of the guild and builds
/// the subscriber registry from the configured notification channels, then
/// activates the shared state.
///
/// # Arguments
/// - `handler` - Event handler holding the shared state and configuration
/// - `ctx` - Discord context for cache and HTTP access
/// - `guild` - Guild that became available
pub async fn handle_guild_create(handler: &Handler, ctx: Context, guild: Guild) {
    if guild.id != handler.guild_id {
        tracing::debug!("Ignoring untracked guild {} ({})", guild.name, guild.id);
        return;
    }

    if handler.state.is_active().await {
        tracing::debug!("Guild {} available again, trackers already active", guild.id);
        return;
    }

    tracing::info!("Initializing room manager for guild {} ({})", guild.name, guild.id);

    let enumerator = CacheVoiceChannelEnumerator::new(ctx.cache.clone());
    let rooms = match RoomManager::from_enumerator(&enumerator, guild.id.get()).await {
        Ok(rooms) => rooms,
        Err(e) => {
            tracing::error!("Failed to seed voice rooms for guild {}: {}", guild.id, e);
            return;
        }
    };

    tracing::info!("Initializing notification manager for guild {}", guild.id);

    let resolver = CacheTextChannelResolver::new(ctx.cache.clone(), ctx.http.clone(), guild.id);
    let notifications =
        NotificationManager::from_channel_ids(&resolver, &handler.notification_channel_ids).await;

    if handler
        .state
        .activate(Managers {
            rooms,
            notifications,
        })
        .await
    {
        tracing::info!("Room tracking started for guild {}", guild.id);
    }
}
