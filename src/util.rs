use chrono::{DateTime, FixedOffset};

use crate::error::{Error, Result};

/// Parse a message timestamp.
///
/// Accepts RFC 3339 (`2016-02-17T10:00:00Z`) and the offset form without a colon
/// (`2016-02-17T10:00:00+0200`).
pub fn parse_timestamp(s: &str) -> Result<DateTime<FixedOffset>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt);
    }
    // Example: 2016-02-17T10:00:00+0200
    let custom_format = "%Y-%m-%dT%H:%M:%S%z";
    Ok(DateTime::parse_from_str(s, custom_format)?)
}

/// Whether `c` may appear inside a username.
pub fn is_username_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '-'
}

/// Whether `s` is a well-formed username: non-empty, only `[A-Za-z0-9_-]`.
pub fn is_valid_username(s: &str) -> bool {
    !s.is_empty() && s.chars().all(is_username_char)
}

pub fn validate_username(s: &str) -> Result<()> {
    if is_valid_username(s) {
        Ok(())
    } else {
        Err(Error::InvalidUsername(s.to_string()))
    }
}

/// Fold a username to its identity form.
///
/// Usernames are case-insensitive, so every key, set element and comparison
/// goes through this first. Malformed input is folded as-is, never rejected.
pub fn normalize_username(s: &str) -> String {
    s.to_lowercase()
}
