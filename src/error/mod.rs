//! Error types for the room tracker and its Discord integration.
//!
//! `AppError` is the top-level error type that wraps domain-specific errors from
//! configuration, the trackers and the Discord client. Event handlers and the
//! broadcast scheduler are the boundaries where an `AppError` is logged instead of
//! propagated, so no error raised here ever stops the bot.

pub mod config;
pub mod internal;
pub mod tracker;

use dioxus_logger::tracing::subscriber::SetGlobalDefaultError;
use thiserror::Error;

use crate::error::{
    config::ConfigError,
    internal::InternalError,
    tracker::{NotificationError, RoomError},
};

/// Top-level application error type.
///
/// Most variants use `#[from]` for automatic conversion so callers can use `?`
/// across layers.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Room tracker rejected its input.
    #[error(transparent)]
    RoomErr(#[from] RoomError),

    /// Notification subscriber registry rejected its input.
    #[error(transparent)]
    NotificationErr(#[from] NotificationError),

    /// Unexpected internal condition such as an unparsable stored id.
    #[error(transparent)]
    InternalErr(#[from] InternalError),

    /// Discord API error from Serenity.
    ///
    /// Boxed due to large size.
    #[error(transparent)]
    DiscordErr(#[from] Box<serenity::Error>),

    /// Cron scheduler error.
    #[error(transparent)]
    SchedulerErr(#[from] tokio_cron_scheduler::JobSchedulerError),

    /// Failed to install the global log subscriber.
    #[error(transparent)]
    LoggerErr(#[from] SetGlobalDefaultError),

    /// Resource not found error.
    ///
    /// # Fields
    /// - Message describing what resource was not found
    #[error("{0}")]
    NotFound(String),
}

/// Manual conversion from serenity::Error to AppError.
///
/// Boxes the error to reduce the size of the AppError enum, as serenity::Error
/// is very large and would make all AppError variants larger if not boxed.
impl From<serenity::Error> for AppError {
    fn from(err: serenity::Error) -> Self {
        AppError::DiscordErr(Box::new(err))
    }
}
