//! Ready event handler for bot initialization.
//!
//! The ready event fires after the gateway handshake, before guilds are
//! available. Tracker initialisation waits for `guild_create` since the guild's
//! channels and voice states are only cached from then on.

use dioxus_logger::tracing;
use serenity::all::{ActivityData, Context, Ready};

/// Handles the ready event when the bot connects to Discord.
///
/// # Arguments
/// - `ctx` - Discord context for setting activity status
/// - `ready` - Ready event data containing bot user information
pub async fn handle_ready(ctx: Context, ready: Ready) {
    tracing::info!("{} is connected to Discord", ready.user.name);

    ctx.set_activity(Some(ActivityData::watching("voice rooms")));
}
