use dioxus_logger::tracing;
use serenity::all::{Client, GatewayIntents, GuildId};
use serenity::http::Http;
use std::sync::Arc;

use crate::{bot::handler::Handler, config::Config, error::AppError, state::AppState};

/// Builds the Discord bot client without connecting it.
///
/// The returned HTTP client is shared with the broadcast scheduler so messages are
/// sent through the same rate limiter as the bot.
///
/// # Arguments
/// - `config` - Application configuration (token, tracked guild, seeded channels)
/// - `state` - Shared tracker state the event handler writes to
///
/// # Returns
/// - `Ok((Client, Arc<Http>))` - Configured client and its HTTP handle
/// - `Err(AppError)` - Client construction failed
pub async fn init_bot(config: &Config, state: AppState) -> Result<(Client, Arc<Http>), AppError> {
    // GUILD_VOICE_STATES fills the cache's voice states the member counts are read from
    let intents = GatewayIntents::GUILDS | GatewayIntents::GUILD_VOICE_STATES;

    let handler = Handler::new(
        state,
        GuildId::new(config.guild_id),
        config.notification_channel_ids.clone(),
    );

    let client = Client::builder(&config.discord_token, intents)
        .event_handler(handler)
        .await?;

    let http = client.http.clone();

    Ok((client, http))
}

/// Starts the Discord bot in a blocking manner
///
/// Runs until the gateway connection shuts down.
///
/// # Returns
/// - `Ok(())` if the bot runs and shuts down cleanly
/// - `Err(AppError)` if connecting to the gateway fails
pub async fn start_bot(mut client: Client) -> Result<(), AppError> {
    tracing::info!("Starting Discord bot...");

    client.start().await?;

    Ok(())
}
