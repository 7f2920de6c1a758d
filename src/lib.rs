//! Discord bot recommending voice rooms that are looking for players.
//!
//! The bot tracks member counts of a guild's voice channels and periodically
//! broadcasts the rooms worth joining (not empty, not full, busiest first) to a
//! list of subscribed text channels.
//!
//! # Architecture
//!
//! - **Model** (`model/`) - Room and notification channel snapshots
//! - **Service** (`service/`) - In-memory trackers owning rooms and subscribers
//! - **Capability** (`capability`) - Traits the trackers need from the platform
//! - **State** (`state`) - Shared idle/active handle to the trackers
//! - **Scheduler** (`scheduler/`) - Fixed-period availability broadcast
//! - **Bot** (`bot/`) - Serenity event handlers and capability adapters
//! - **Configuration** (`config`) - Environment-based configuration
//! - **Error** (`error/`) - Application error types

pub mod bot;
pub mod capability;
pub mod config;
pub mod error;
pub mod model;
pub mod scheduler;
pub mod service;
pub mod state;
pub mod util;

#[cfg(test)]
pub(crate) mod test_support;
