//! Conversation types for the Slack API.
//!
//! Shapes nest by composition: a [`Channel`] holds a [`GroupConversation`],
//! which holds a [`Conversation`]. Each layer exposes the inner fields through
//! delegating accessors.

use super::{ChannelId, JsonTime, Message, Timestamp, UserId};
use serde::{Deserialize, Serialize};

/// Fields shared by every conversation (channels, groups, IMs)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Conversation {
    /// Conversation ID
    pub id: ChannelId,
    /// Creation time
    #[serde(default)]
    pub created: JsonTime,
    /// Whether the conversation is open
    #[serde(default)]
    pub is_open: bool,
    /// Last read marker
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_read: Option<Timestamp>,
    /// Latest message
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latest: Option<Message>,
    /// Unread count
    #[serde(default)]
    pub unread_count: u32,
    /// Unread count shown to the user
    #[serde(default)]
    pub unread_count_display: u32,
}

/// Channel topic
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Topic {
    /// Topic value
    #[serde(default)]
    pub value: String,
    /// Who set the topic
    #[serde(default)]
    pub creator: String,
    /// When the topic was set
    #[serde(default)]
    pub last_set: JsonTime,
}

/// Channel purpose
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Purpose {
    /// Purpose value
    #[serde(default)]
    pub value: String,
    /// Who set the purpose
    #[serde(default)]
    pub creator: String,
    /// When the purpose was set
    #[serde(default)]
    pub last_set: JsonTime,
}

/// Conversation with a name and a member list (channels and private groups)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GroupConversation {
    /// Base conversation fields
    #[serde(flatten)]
    pub conversation: Conversation,
    /// Channel name (without #)
    #[serde(default)]
    pub name: String,
    /// Creator user ID
    #[serde(default)]
    pub creator: String,
    /// Whether this is archived
    #[serde(default)]
    pub is_archived: bool,
    /// Member user IDs, in the order the service returned them
    #[serde(default)]
    pub members: Vec<UserId>,
    /// Channel topic
    #[serde(default)]
    pub topic: Topic,
    /// Channel purpose
    #[serde(default)]
    pub purpose: Purpose,
}

impl GroupConversation {
    /// Base conversation fields
    pub fn conversation(&self) -> &Conversation {
        &self.conversation
    }

    /// Conversation ID
    pub fn id(&self) -> &ChannelId {
        &self.conversation.id
    }

    /// Creation time
    pub fn created(&self) -> JsonTime {
        self.conversation.created
    }

    /// Whether the conversation is open
    pub fn is_open(&self) -> bool {
        self.conversation.is_open
    }

    /// Last read marker
    pub fn last_read(&self) -> Option<&Timestamp> {
        self.conversation.last_read.as_ref()
    }

    /// Latest message
    pub fn latest(&self) -> Option<&Message> {
        self.conversation.latest.as_ref()
    }

    /// Unread count
    pub fn unread_count(&self) -> u32 {
        self.conversation.unread_count
    }

    /// Unread count shown to the user
    pub fn unread_count_display(&self) -> u32 {
        self.conversation.unread_count_display
    }
}

/// Channel/conversation returned by the conversations.* methods
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Channel {
    /// Group fields (name, members, topic, purpose)
    #[serde(flatten)]
    pub group: GroupConversation,
    /// Whether this is a channel
    #[serde(default)]
    pub is_channel: bool,
    /// Whether this is a private group
    #[serde(default)]
    pub is_group: bool,
    /// Whether this is a direct message
    #[serde(default)]
    pub is_im: bool,
    /// Whether this is a multi-party direct message
    #[serde(default)]
    pub is_mpim: bool,
    /// Whether this is a private channel
    #[serde(default)]
    pub is_private: bool,
    /// Whether this is the workspace's general channel
    #[serde(default)]
    pub is_general: bool,
    /// Whether the calling user is a member
    #[serde(default)]
    pub is_member: bool,
    /// Locale, only present when requested with `include_locale`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,
}

impl Channel {
    /// Group fields
    pub fn group(&self) -> &GroupConversation {
        &self.group
    }

    /// Base conversation fields
    pub fn conversation(&self) -> &Conversation {
        self.group.conversation()
    }

    /// Channel ID
    pub fn id(&self) -> &ChannelId {
        self.group.id()
    }

    /// Channel name
    pub fn name(&self) -> &str {
        &self.group.name
    }

    /// Creator user ID
    pub fn creator(&self) -> &str {
        &self.group.creator
    }

    /// Whether this is archived
    pub fn is_archived(&self) -> bool {
        self.group.is_archived
    }

    /// Member user IDs
    pub fn members(&self) -> &[UserId] {
        &self.group.members
    }

    /// Channel topic
    pub fn topic(&self) -> &Topic {
        &self.group.topic
    }

    /// Channel purpose
    pub fn purpose(&self) -> &Purpose {
        &self.group.purpose
    }

    /// Creation time
    pub fn created(&self) -> JsonTime {
        self.group.created()
    }

    /// Whether the conversation is open
    pub fn is_open(&self) -> bool {
        self.group.is_open()
    }

    /// Display name: the name, or the ID for unnamed conversations
    pub fn display_name(&self) -> &str {
        if self.group.name.is_empty() {
            self.id().as_str()
        } else {
            &self.group.name
        }
    }
}

/// Conversation type filter for conversations.list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChannelType {
    /// Public channel
    PublicChannel,
    /// Private channel
    PrivateChannel,
    /// Multi-party IM
    Mpim,
    /// Direct message
    Im,
}

impl ChannelType {
    /// Get the API filter string for this channel type
    pub fn as_api_filter(&self) -> &'static str {
        match self {
            ChannelType::PublicChannel => "public_channel",
            ChannelType::PrivateChannel => "private_channel",
            ChannelType::Mpim => "mpim",
            ChannelType::Im => "im",
        }
    }
}
