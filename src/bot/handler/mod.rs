use serenity::all::{Context, EventHandler, Guild, GuildChannel, GuildId, Ready, VoiceState};
use serenity::async_trait;

use crate::state::AppState;

pub mod channel;
pub mod guild;
pub mod ready;
pub mod voice;

/// Discord bot event handler
pub struct Handler {
    pub state: AppState,
    /// Guild whose voice channels are tracked; events from other guilds are ignored.
    pub guild_id: GuildId,
    /// Text channels subscribed to broadcasts on activation.
    pub notification_channel_ids: Vec<u64>,
}

impl Handler {
    pub fn new(state: AppState, guild_id: GuildId, notification_channel_ids: Vec<u64>) -> Self {
        Self {
            state,
            guild_id,
            notification_channel_ids,
        }
    }
}

#[async_trait]
impl EventHandler for Handler {
    /// Called when the bot is ready and connected to Discord
    async fn ready(&self, ctx: Context, ready: Ready) {
        ready::handle_ready(ctx, ready).await;
    }

    /// Called when a guild becomes available or the bot joins a new guild
    async fn guild_create(&self, ctx: Context, guild: Guild, _is_new: Option<bool>) {
        guild::handle_guild_create(self, ctx, guild).await;
    }

    /// Called when a channel is updated in a guild
    async fn channel_update(&self, ctx: Context, old: Option<GuildChannel>, new: GuildChannel) {
        channel::handle_channel_update(self, ctx, old, new).await;
    }

    /// Called when a member joins, leaves or moves between voice channels
    async fn voice_state_update(&self, ctx: Context, old: Option<VoiceState>, new: VoiceState) {
        voice::handle_voice_state_update(self, ctx, old, new).await;
    }
}
