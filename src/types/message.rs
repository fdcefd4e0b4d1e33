//! Message snapshot carried as a conversation's `latest` field.

use super::{Timestamp, UserId};
use serde::{Deserialize, Serialize};

/// Slack message
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    /// Message type
    #[serde(rename = "type", default)]
    pub message_type: String,
    /// Message subtype
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtype: Option<String>,
    /// Message text
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// User who sent the message
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<UserId>,
    /// Bot ID if sent by a bot
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bot_id: Option<String>,
    /// Message timestamp (unique ID)
    #[serde(default)]
    pub ts: Timestamp,
    /// Thread timestamp (if in a thread)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thread_ts: Option<Timestamp>,
}

impl Message {
    /// Check if this message is a thread reply
    pub fn is_thread_reply(&self) -> bool {
        matches!(&self.thread_ts, Some(thread_ts) if *thread_ts != self.ts)
    }

    /// Check if this message was posted by a bot
    pub fn is_bot_message(&self) -> bool {
        self.bot_id.is_some() || self.subtype.as_deref() == Some("bot_message")
    }
}
