use crate::error::{internal::InternalError, AppError};

/// Parses a Discord snowflake id from a string
///
/// Rejects zero since serenity's id constructors panic on it.
///
/// # Arguments
/// - `value` - The string to attempt to parse into `u64`
///
/// # Returns
/// - `Ok(u64)` - Successfully parsed a non-zero id
/// - `Err(AppError::InternalErr(ParseStringId))` - Failed to parse the string as a u64
/// - `Err(AppError::InternalErr(ZeroId))` - The string parsed to zero
pub fn parse_snowflake(value: &str) -> Result<u64, AppError> {
    let id = value
        .trim()
        .parse::<u64>()
        .map_err(|e| InternalError::ParseStringId {
            value: value.to_string(),
            source: e,
        })?;

    if id == 0 {
        return Err(InternalError::ZeroId {
            value: value.to_string(),
        }
        .into());
    }

    Ok(id)
}
