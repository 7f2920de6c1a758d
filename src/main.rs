use dioxus_logger::tracing;
use std::sync::Arc;

use roomscout::{
    bot::{self, adapter::HttpTextChannelSender, format::PlainBroadcastFormatter},
    config::Config,
    error::AppError,
    scheduler::{self, broadcast::RoomBroadcaster},
    state::AppState,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    let config = Config::from_env()?;

    dioxus_logger::init(config.log_level)?;

    tracing::info!("Starting roomscout for guild {}", config.guild_id);

    let state = AppState::new();

    let (bot_client, discord_http) = bot::start::init_bot(&config, state.clone()).await?;

    // Ticks are no-ops until the guild becomes available and activates the state
    let broadcaster = RoomBroadcaster::new(
        state,
        Arc::new(HttpTextChannelSender::new(discord_http)),
        Arc::new(PlainBroadcastFormatter),
    );
    let _scheduler = scheduler::start_scheduler(broadcaster).await?;

    bot::start::start_bot(bot_client).await
}
