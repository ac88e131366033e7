//! Room entity - a named scope for questions

use chrono::{DateTime, NaiveDateTime, Utc};

use crate::value_objects::RoomId;

/// Room entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Room {
    pub id: RoomId,
    pub name: String,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl Room {
    /// Create a new Room
    pub fn new(id: RoomId, name: String) -> Self {
        Self {
            id,
            name,
            created_at: None,
            updated_at: None,
        }
    }
}

/// Parse a timestamp as the AMA service renders it
///
/// Accepts RFC 3339 as well as the `2024-07-10 12:34:56.789 +0000 UTC` layout
/// the service emits. Timestamps are informational, so anything else is `None`.
pub fn parse_server_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }

    // Drop the trailing zone abbreviation ("UTC", "CEST", ...) and an optional
    // monotonic clock suffix ("m=+0.000000001") before parsing the offset form.
    let without_monotonic = raw.split(" m=").next().unwrap_or(raw);
    let mut parts: Vec<&str> = without_monotonic.split_whitespace().collect();
    if parts.len() == 4 {
        parts.pop();
    }
    let candidate = parts.join(" ");

    if let Ok(dt) = DateTime::parse_from_str(&candidate, "%Y-%m-%d %H:%M:%S%.f %z") {
        return Some(dt.with_timezone(&Utc));
    }

    NaiveDateTime::parse_from_str(&candidate, "%Y-%m-%d %H:%M:%S%.f")
        .ok()
        .map(|naive| naive.and_utc())
}
