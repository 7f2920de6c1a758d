//! Roomscout Test Utils
//!
//! Shared testing utilities for the roomscout bot. The crate provides factories
//! that build Serenity model objects (guilds, channels, voice states) the way
//! Discord's gateway would deliver them, so the bot's serenity adapters can be
//! tested without a gateway connection.
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::serenity::{channel::create_test_voice_channel, voice_state::create_test_voice_state};
//!
//! #[test]
//! fn test_room_conversion() {
//!     let channel = create_test_voice_channel(100, 201, "Squad", 0, Some(5));
//!     let state = create_test_voice_state(100, 1, Some(201));
//!     // Convert and assert...
//! }
//! ```

pub mod serenity;
