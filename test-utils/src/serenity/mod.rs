//! Test factories for creating Serenity API objects.
//!
//! These factories create valid Serenity structs by deserializing JSON, simulating
//! what Discord's API would return, with sensible defaults for every field the
//! tests do not care about.
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::serenity::{
//!     channel::{create_test_text_channel, create_test_voice_channel},
//!     guild::create_test_guild_with_channels,
//!     voice_state::create_test_voice_state,
//! };
//!
//! #[test]
//! fn test_guild_rooms() {
//!     let guild = create_test_guild_with_channels(
//!         100,
//!         "Test Guild",
//!         vec![
//!             create_test_voice_channel(100, 201, "Squad", 0, Some(5)),
//!             create_test_text_channel(100, 301, "general", 1),
//!         ],
//!         vec![create_test_voice_state(100, 1, Some(201))],
//!     );
//!
//!     // Use in your tests...
//! }
//! ```
//!
//! # Available Factories
//!
//! - `guild::create_test_guild_with_channels` - Guild with channels and voice states
//! - `channel::create_test_voice_channel` - Create voice GuildChannel objects
//! - `channel::create_test_text_channel` - Create text GuildChannel objects
//! - `voice_state::create_test_voice_state` - Create VoiceState objects

pub mod channel;
pub mod guild;
pub mod voice_state;

// Re-export commonly used functions for convenience
pub use channel::{create_test_text_channel, create_test_voice_channel};
pub use guild::create_test_guild_with_channels;
pub use voice_state::create_test_voice_state;
