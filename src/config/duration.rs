//! Human-readable durations for the config file
//!
//! Values are a whole number with an optional unit suffix: `s` (seconds),
//! `h` (hours), `d` (days), `w` (weeks). A bare number means days.
//! Examples: "30d", "48h", "2w", "15".
//!
//! Use as `#[serde(with = "crate::config::duration")]`.

use std::time::Duration;

use serde::{Deserialize, Deserializer, Serializer};

use crate::error::ConfigError;

const MINUTE: u64 = 60;
const HOUR: u64 = 60 * MINUTE;
const DAY: u64 = 24 * HOUR;
const WEEK: u64 = 7 * DAY;

/// Parse a duration string such as "30d" or "48h".
pub fn parse(input: &str) -> Result<Duration, ConfigError> {
    let trimmed = input.trim();
    let invalid = |reason: &str| ConfigError::InvalidDuration {
        input: input.to_string(),
        reason: reason.to_string(),
    };

    let (number, unit) = match trimmed.find(|c: char| c.is_alphabetic()) {
        Some(pos) => trimmed.split_at(pos),
        None => (trimmed, "d"),
    };

    let value: u64 = number
        .trim()
        .parse()
        .map_err(|_| invalid("expected a whole number"))?;

    let scale = match unit.to_ascii_lowercase().as_str() {
        "s" => 1,
        "h" => HOUR,
        "d" => DAY,
        "w" => WEEK,
        _ => return Err(invalid("supported units are s, h, d, w")),
    };

    value
        .checked_mul(scale)
        .map(Duration::from_secs)
        .ok_or_else(|| invalid("value too large"))
}

/// Format using the largest unit that represents the duration exactly.
///
/// Sub-second precision is dropped.
pub fn format(duration: Duration) -> String {
    let secs = duration.as_secs();
    if secs == 0 {
        return "0d".to_string();
    }
    for (scale, unit) in [(WEEK, "w"), (DAY, "d"), (HOUR, "h")] {
        if secs % scale == 0 {
            return format!("{}{unit}", secs / scale);
        }
    }
    format!("{secs}s")
}

pub fn serialize<S: Serializer>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&format(*duration))
}

pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Days(u64),
    }

    match Raw::deserialize(deserializer)? {
        Raw::Text(text) => parse(&text).map_err(serde::de::Error::custom),
        Raw::Days(days) => days
            .checked_mul(DAY)
            .map(Duration::from_secs)
            .ok_or_else(|| serde::de::Error::custom("duration too large")),
    }
}
