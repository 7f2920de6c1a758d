use std::num::ParseIntError;
use thiserror::Error;

/// Internal issues with the codebase indicating unexpected behavior & possible bugs
#[derive(Error, Debug)]
pub enum InternalError {
    /// Failure to parse a Discord snowflake id from String
    #[error("Failed to parse ID from String '{value}': {source}")]
    ParseStringId {
        /// The string value that failed to parse
        value: String,
        /// The underlying parse error
        #[source]
        source: ParseIntError,
    },

    /// Snowflake ids are never zero; serenity panics when constructing one.
    #[error("ID '{value}' is zero and cannot refer to a Discord entity")]
    ZeroId {
        /// The string value that parsed to zero
        value: String,
    },
}
