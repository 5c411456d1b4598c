//! ISO-8601 timestamps as exchanged with the server
//!
//! Besides RFC 3339, values may omit seconds (`2024-05-01T10:00Z`) or carry a
//! region suffix (`2024-05-01T10:00:00+02:00[Europe/Warsaw]`).

use crate::error::{Result, SessionKeysError};
use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Deserializer, Serializer};

/// Instant used for every session key timestamp
pub type Timestamp = DateTime<Utc>;

/// Parse a server timestamp
///
/// # Errors
///
/// Returns [`SessionKeysError::InvalidTimestamp`] when no supported form matches.
pub fn parse_timestamp(value: &str) -> Result<Timestamp> {
    let trimmed = value.trim();
    let without_region = match (trimmed.find('['), trimmed.ends_with(']')) {
        (Some(start), true) => &trimmed[..start],
        _ => trimmed,
    };

    DateTime::parse_from_rfc3339(without_region)
        .or_else(|_| {
            let offset_form = match without_region.strip_suffix('Z') {
                Some(local) => format!("{local}+00:00"),
                None => without_region.to_string(),
            };
            DateTime::parse_from_str(&offset_form, "%Y-%m-%dT%H:%M%:z")
        })
        .map(|parsed| parsed.with_timezone(&Utc))
        .map_err(|e| SessionKeysError::InvalidTimestamp {
            value: value.to_string(),
            reason: e.to_string(),
        })
}

/// RFC 3339 form written back to the server
#[must_use]
pub fn format_timestamp(timestamp: &Timestamp) -> String {
    timestamp.to_rfc3339_opts(SecondsFormat::AutoSi, true)
}

/// `#[serde(with = "timestamp")]` support
pub fn serialize<S: Serializer>(timestamp: &Timestamp, serializer: S) -> std::result::Result<S::Ok, S::Error> {
    serializer.serialize_str(&format_timestamp(timestamp))
}

/// `#[serde(with = "timestamp")]` support
pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Timestamp, D::Error> {
    let raw = String::deserialize(deserializer)?;
    parse_timestamp(&raw).map_err(serde::de::Error::custom)
}
