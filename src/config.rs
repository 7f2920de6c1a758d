use dioxus_logger::tracing::Level;

use crate::error::{config::ConfigError, AppError};

pub struct Config {
    pub discord_token: String,
    /// Guild whose voice channels are tracked.
    pub guild_id: u64,
    /// Text channels subscribed to broadcasts when the bot starts.
    pub notification_channel_ids: Vec<u64>,
    pub log_level: Level,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let discord_token = std::env::var("DISCORD_TOKEN")
            .map_err(|_| ConfigError::MissingEnvVar("DISCORD_TOKEN".to_string()))?;

        let guild_id = std::env::var("GUILD_ID")
            .map_err(|_| ConfigError::MissingEnvVar("GUILD_ID".to_string()))?;
        let guild_id = parse_id("GUILD_ID", &guild_id)?;

        let notification_channel_ids = match std::env::var("NOTIFICATION_CHANNEL_IDS") {
            Ok(value) => parse_id_list("NOTIFICATION_CHANNEL_IDS", &value)?,
            Err(_) => Vec::new(),
        };

        let log_level = match std::env::var("LOG_LEVEL") {
            Ok(value) => value
                .trim()
                .parse::<Level>()
                .map_err(|e| ConfigError::InvalidEnvVar {
                    name: "LOG_LEVEL".to_string(),
                    value: value.clone(),
                    reason: e.to_string(),
                })?,
            Err(_) => Level::INFO,
        };

        Ok(Self {
            discord_token,
            guild_id,
            notification_channel_ids,
            log_level,
        })
    }
}

fn parse_id(name: &str, value: &str) -> Result<u64, ConfigError> {
    let invalid = |reason: String| ConfigError::InvalidEnvVar {
        name: name.to_string(),
        value: value.to_string(),
        reason,
    };

    let id = value.trim().parse::<u64>().map_err(|e| invalid(e.to_string()))?;
    if id == 0 {
        return Err(invalid("Discord ids are never zero".to_string()));
    }

    Ok(id)
}

/// Comma-separated ids; blank entries are skipped.
fn parse_id_list(name: &str, value: &str) -> Result<Vec<u64>, ConfigError> {
    value
        .split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(|entry| parse_id(name, entry))
        .collect()
}
