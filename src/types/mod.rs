//! Common types for the Slack API.
//!
//! Defines the envelope every method returns and the identifiers shared
//! across requests and responses.

use chrono::{DateTime, Utc};
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

pub mod conversation;
pub mod message;

pub use conversation::*;
pub use message::*;

/// Slack timestamp (ts) - unique identifier for messages
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timestamp(pub String);

impl Timestamp {
    /// Create a new timestamp
    pub fn new(ts: impl Into<String>) -> Self {
        Self(ts.into())
    }

    /// Get the timestamp as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Parse timestamp to DateTime
    pub fn to_datetime(&self) -> Option<DateTime<Utc>> {
        let secs = self.0.split('.').next()?.parse::<i64>().ok()?;
        DateTime::from_timestamp(secs, 0)
    }
}

impl From<String> for Timestamp {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for Timestamp {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Slack channel ID
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChannelId(pub String);

impl ChannelId {
    /// Create a new channel ID
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the ID as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Check if this is a public channel ID (starts with C)
    pub fn is_public_channel(&self) -> bool {
        self.0.starts_with('C')
    }

    /// Check if this is a private channel or MPDM ID (starts with G)
    pub fn is_private_channel(&self) -> bool {
        self.0.starts_with('G')
    }

    /// Check if this is a DM channel ID (starts with D)
    pub fn is_dm(&self) -> bool {
        self.0.starts_with('D')
    }
}

impl From<String> for ChannelId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for ChannelId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl AsRef<str> for ChannelId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ChannelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Slack user ID
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(pub String);

impl UserId {
    /// Create a new user ID
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the ID as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for UserId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for UserId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl AsRef<str> for UserId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<&str> for UserId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Opaque pagination cursor.
///
/// The empty cursor means "start from the beginning" on input and "no more
/// pages" on output.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cursor(pub String);

impl Cursor {
    /// Create a new cursor
    pub fn new(cursor: impl Into<String>) -> Self {
        Self(cursor.into())
    }

    /// Get the cursor as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True for the start / end-of-collection cursor
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<String> for Cursor {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for Cursor {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl fmt::Display for Cursor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Unix-seconds timestamp as sent by the API.
///
/// The service emits these both as JSON numbers and as numeric strings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct JsonTime(pub i64);

impl JsonTime {
    /// Seconds since the Unix epoch
    pub fn unix_seconds(&self) -> i64 {
        self.0
    }

    /// Convert to a UTC DateTime
    pub fn to_datetime(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.0, 0)
    }
}

impl Serialize for JsonTime {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_i64(self.0)
    }
}

impl<'de> Deserialize<'de> for JsonTime {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct JsonTimeVisitor;

        impl<'de> de::Visitor<'de> for JsonTimeVisitor {
            type Value = JsonTime;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("unix seconds as a number or numeric string")
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<JsonTime, E> {
                Ok(JsonTime(v))
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<JsonTime, E> {
                i64::try_from(v)
                    .map(JsonTime)
                    .map_err(|_| E::custom("timestamp out of range"))
            }

            fn visit_f64<E: de::Error>(self, v: f64) -> Result<JsonTime, E> {
                Ok(JsonTime(v.trunc() as i64))
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<JsonTime, E> {
                let v = v.trim();
                if let Ok(secs) = v.parse::<i64>() {
                    return Ok(JsonTime(secs));
                }
                v.parse::<f64>()
                    .map(|secs| JsonTime(secs.trunc() as i64))
                    .map_err(|_| E::invalid_value(de::Unexpected::Str(v), &self))
            }
        }

        deserializer.deserialize_any(JsonTimeVisitor)
    }
}

/// Response metadata for pagination
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ResponseMetadata {
    /// Next cursor for pagination
    #[serde(default)]
    pub next_cursor: Cursor,
    /// Extra warnings
    #[serde(default)]
    pub warnings: Vec<String>,
}

impl ResponseMetadata {
    /// Check if there are more results
    pub fn has_more(&self) -> bool {
        !self.next_cursor.is_empty()
    }
}

/// Envelope wrapping every API response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SlackResponse<T> {
    /// Whether the request was successful
    pub ok: bool,
    /// Error code if not successful
    #[serde(default)]
    pub error: Option<String>,
    /// Warning message
    #[serde(default)]
    pub warning: Option<String>,
    /// Response metadata
    #[serde(default)]
    pub response_metadata: Option<ResponseMetadata>,
    /// Operation-specific payload
    #[serde(flatten)]
    pub data: T,
}

impl<T> SlackResponse<T> {
    /// Continuation cursor, empty when there are no more pages
    pub fn next_cursor(&self) -> Cursor {
        self.response_metadata
            .as_ref()
            .map(|m| m.next_cursor.clone())
            .unwrap_or_default()
    }
}

/// Payload for methods that return nothing but the envelope
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EmptyPayload {}
