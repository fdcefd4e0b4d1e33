//! Response payloads for conversations service.
//!
//! These hold only the operation-specific fields; `ok`, `error` and
//! `response_metadata` live on the envelope.

use crate::types::{Channel, UserId};
use serde::Deserialize;

/// Payload of conversations.members
#[derive(Debug, Clone, Deserialize)]
pub struct ConversationMembersPayload {
    /// Member user IDs
    #[serde(default)]
    pub members: Vec<UserId>,
}

/// Payload of every method that returns a single channel
#[derive(Debug, Clone, Deserialize)]
pub struct ChannelPayload {
    /// The channel
    pub channel: Channel,
}

/// Payload of conversations.list
#[derive(Debug, Clone, Deserialize)]
pub struct ListConversationsPayload {
    /// Channels in this page
    #[serde(default)]
    pub channels: Vec<Channel>,
}

/// Response from conversations.close
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct CloseConversationResponse {
    /// Whether there is a no-op (nothing changed)
    #[serde(default)]
    pub no_op: bool,
    /// Whether the conversation was already closed
    #[serde(default)]
    pub already_closed: bool,
}

/// Response from conversations.leave
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct LeaveConversationResponse {
    /// Set when the caller was not a member to begin with
    #[serde(default)]
    pub not_in_channel: bool,
}
