//! Discord bot integration feeding the room tracker.
//!
//! The bot keeps the trackers in sync with the configured guild: it seeds them when
//! the guild becomes available, pushes member counts on every voice state change
//! and refreshes room details when a voice channel is edited. Its HTTP client is
//! shared with the broadcast scheduler to deliver messages.
//!
//! # Gateway Intents
//!
//! The bot requires the following gateway intents:
//! - `GUILDS` - Receive guild availability and channel update events
//! - `GUILD_VOICE_STATES` - Receive voice state updates and cache voice states

pub mod adapter;
pub mod format;
pub mod handler;
pub mod start;
