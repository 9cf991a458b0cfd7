//! Validation of values entered during interactive configuration
//!
//! Every parser takes the raw line the user typed and the current value,
//! which is kept when the line is blank.

use std::time::Duration;

use regex::Regex;

use crate::error::ConfigError;

/// Maximum allowed length for a remote name.
pub const MAX_REMOTE_NAME_LENGTH: usize = 128;

const SECS_PER_DAY: u64 = 24 * 60 * 60;

/// Validates a remote name such as `origin` or `upstream`.
///
/// ```
/// use sweep::validation::validate_remote_name;
///
/// assert!(validate_remote_name("origin").is_ok());
/// assert!(validate_remote_name("my_fork-2").is_ok());
/// assert!(validate_remote_name("").is_err());
/// assert!(validate_remote_name("../origin").is_err());
/// ```
pub fn validate_remote_name(name: &str) -> Result<(), ConfigError> {
    if name.is_empty() {
        return Err(ConfigError::Invalid("remote name cannot be empty".into()));
    }

    if name.len() > MAX_REMOTE_NAME_LENGTH {
        return Err(ConfigError::Invalid(format!(
            "remote name too long: {} characters (max {MAX_REMOTE_NAME_LENGTH})",
            name.len()
        )));
    }

    let valid_chars = name
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
    if !valid_chars {
        return Err(ConfigError::Invalid(format!(
            "remote name '{name}' contains invalid characters. Use only alphanumeric characters, dashes (-), and underscores (_)"
        )));
    }

    Ok(())
}

/// Every pattern must compile.
pub fn validate_patterns(patterns: &[String]) -> Result<(), ConfigError> {
    for pattern in patterns {
        Regex::new(pattern).map_err(|e| {
            ConfigError::Invalid(format!("invalid regex pattern '{pattern}': {e}"))
        })?;
    }
    Ok(())
}

/// Parse a comma-separated list.
///
/// Entries are trimmed and empty entries dropped; a blank line keeps
/// `current`. With `regex` set, every entry must compile as a pattern.
pub fn parse_list(input: &str, current: &[String], regex: bool) -> Result<Vec<String>, ConfigError> {
    if input.trim().is_empty() {
        return Ok(current.to_vec());
    }

    let items: Vec<String> = input
        .split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(String::from)
        .collect();

    if items.is_empty() {
        return Err(ConfigError::Invalid("list cannot be empty".into()));
    }
    if regex {
        validate_patterns(&items)?;
    }
    Ok(items)
}

/// Parse a whole number of days; a blank line keeps `current`.
pub fn parse_max_age(input: &str, current: Duration) -> Result<Duration, ConfigError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Ok(current);
    }
    let days: u64 = trimmed.parse().map_err(|_| {
        ConfigError::Invalid(format!(
            "'{trimmed}' is not a valid number of days (expected a whole number, 0 or more)"
        ))
    })?;
    days
        .checked_mul(SECS_PER_DAY)
        .map(Duration::from_secs)
        .ok_or_else(|| ConfigError::Invalid(format!("{days} days is too long")))
}

/// Parse a remote name; a blank line keeps `current`.
pub fn parse_remote_name(input: &str, current: &str) -> Result<String, ConfigError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Ok(current.to_string());
    }
    validate_remote_name(trimmed)?;
    Ok(trimmed.to_string())
}
