//! Request types for conversations service.
//!
//! Each request knows its wire method name and its form fields. The
//! credential is added by the service.

use crate::transport::{ApiRequest, FormFields};
use crate::types::{ChannelId, ChannelType, Cursor, UserId};

/// Request to list the members of a conversation
#[derive(Debug, Clone)]
pub struct ConversationMembersRequest {
    /// Channel ID
    pub channel: ChannelId,
    /// Cursor for pagination, empty for the first page
    pub cursor: Cursor,
    /// Page size, 0 for the service default
    pub limit: u32,
}

impl ConversationMembersRequest {
    /// Create a new request
    pub fn new(channel: impl Into<ChannelId>) -> Self {
        Self {
            channel: channel.into(),
            cursor: Cursor::default(),
            limit: 0,
        }
    }

    /// Set pagination cursor
    pub fn cursor(mut self, cursor: impl Into<Cursor>) -> Self {
        self.cursor = cursor.into();
        self
    }

    /// Set result limit
    pub fn limit(mut self, n: u32) -> Self {
        self.limit = n;
        self
    }
}

impl ApiRequest for ConversationMembersRequest {
    const METHOD: &'static str = "conversations.members";

    fn form_fields(&self) -> FormFields {
        FormFields::new()
            .text("channel", self.channel.as_str())
            .cursor(&self.cursor)
            .count("limit", self.limit)
    }
}

/// Request to archive a conversation
#[derive(Debug, Clone)]
pub struct ArchiveConversationRequest {
    /// Channel ID
    pub channel: ChannelId,
}

impl ArchiveConversationRequest {
    /// Create a new request
    pub fn new(channel: impl Into<ChannelId>) -> Self {
        Self {
            channel: channel.into(),
        }
    }
}

impl ApiRequest for ArchiveConversationRequest {
    const METHOD: &'static str = "conversations.archive";

    fn form_fields(&self) -> FormFields {
        FormFields::new().text("channel", self.channel.as_str())
    }
}

/// Request to unarchive a conversation
#[derive(Debug, Clone)]
pub struct UnarchiveConversationRequest {
    /// Channel ID
    pub channel: ChannelId,
}

impl UnarchiveConversationRequest {
    /// Create a new request
    pub fn new(channel: impl Into<ChannelId>) -> Self {
        Self {
            channel: channel.into(),
        }
    }
}

impl ApiRequest for UnarchiveConversationRequest {
    const METHOD: &'static str = "conversations.unarchive";

    fn form_fields(&self) -> FormFields {
        FormFields::new().text("channel", self.channel.as_str())
    }
}

/// Request to set conversation topic
#[derive(Debug, Clone)]
pub struct SetConversationTopicRequest {
    /// Channel ID
    pub channel: ChannelId,
    /// Topic text
    pub topic: String,
}

impl SetConversationTopicRequest {
    /// Create a new request
    pub fn new(channel: impl Into<ChannelId>, topic: impl Into<String>) -> Self {
        Self {
            channel: channel.into(),
            topic: topic.into(),
        }
    }
}

impl ApiRequest for SetConversationTopicRequest {
    const METHOD: &'static str = "conversations.setTopic";

    fn form_fields(&self) -> FormFields {
        FormFields::new()
            .text("channel", self.channel.as_str())
            .text("topic", self.topic.as_str())
    }
}

/// Request to set conversation purpose
#[derive(Debug, Clone)]
pub struct SetConversationPurposeRequest {
    /// Channel ID
    pub channel: ChannelId,
    /// Purpose text
    pub purpose: String,
}

impl SetConversationPurposeRequest {
    /// Create a new request
    pub fn new(channel: impl Into<ChannelId>, purpose: impl Into<String>) -> Self {
        Self {
            channel: channel.into(),
            purpose: purpose.into(),
        }
    }
}

impl ApiRequest for SetConversationPurposeRequest {
    const METHOD: &'static str = "conversations.setPurpose";

    fn form_fields(&self) -> FormFields {
        FormFields::new()
            .text("channel", self.channel.as_str())
            .text("purpose", self.purpose.as_str())
    }
}

/// Request to rename a conversation
#[derive(Debug, Clone)]
pub struct RenameConversationRequest {
    /// Channel ID
    pub channel: ChannelId,
    /// New name
    pub name: String,
}

impl RenameConversationRequest {
    /// Create a new request
    pub fn new(channel: impl Into<ChannelId>, name: impl Into<String>) -> Self {
        Self {
            channel: channel.into(),
            name: name.into(),
        }
    }
}

impl ApiRequest for RenameConversationRequest {
    const METHOD: &'static str = "conversations.rename";

    fn form_fields(&self) -> FormFields {
        FormFields::new()
            .text("channel", self.channel.as_str())
            .text("name", self.name.as_str())
    }
}

/// Request to invite users to a conversation
#[derive(Debug, Clone)]
pub struct InviteToConversationRequest {
    /// Channel ID
    pub channel: ChannelId,
    /// User IDs to invite
    pub users: Vec<UserId>,
}

impl InviteToConversationRequest {
    /// Create a new request
    pub fn new<I, U>(channel: impl Into<ChannelId>, users: I) -> Self
    where
        I: IntoIterator<Item = U>,
        U: Into<UserId>,
    {
        Self {
            channel: channel.into(),
            users: users.into_iter().map(Into::into).collect(),
        }
    }
}

impl ApiRequest for InviteToConversationRequest {
    const METHOD: &'static str = "conversations.invite";

    fn form_fields(&self) -> FormFields {
        FormFields::new()
            .text("channel", self.channel.as_str())
            .list("users", &self.users)
    }
}

/// Request to kick a user from a conversation
#[derive(Debug, Clone)]
pub struct KickFromConversationRequest {
    /// Channel ID
    pub channel: ChannelId,
    /// User to kick
    pub user: UserId,
}

impl KickFromConversationRequest {
    /// Create a new request
    pub fn new(channel: impl Into<ChannelId>, user: impl Into<UserId>) -> Self {
        Self {
            channel: channel.into(),
            user: user.into(),
        }
    }
}

impl ApiRequest for KickFromConversationRequest {
    const METHOD: &'static str = "conversations.kick";

    fn form_fields(&self) -> FormFields {
        FormFields::new()
            .text("channel", self.channel.as_str())
            .text("user", self.user.as_str())
    }
}

/// Request to close a conversation (DM/MPIM)
#[derive(Debug, Clone)]
pub struct CloseConversationRequest {
    /// Channel ID
    pub channel: ChannelId,
}

impl CloseConversationRequest {
    /// Create a new request
    pub fn new(channel: impl Into<ChannelId>) -> Self {
        Self {
            channel: channel.into(),
        }
    }
}

impl ApiRequest for CloseConversationRequest {
    const METHOD: &'static str = "conversations.close";

    fn form_fields(&self) -> FormFields {
        FormFields::new().text("channel", self.channel.as_str())
    }
}

/// Request to create a new channel
#[derive(Debug, Clone)]
pub struct CreateConversationRequest {
    /// Channel name (without #)
    pub name: String,
    /// Whether the channel should be private
    pub is_private: bool,
}

impl CreateConversationRequest {
    /// Create a new request for a public channel
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            is_private: false,
        }
    }

    /// Set whether the channel is private
    pub fn is_private(mut self, private: bool) -> Self {
        self.is_private = private;
        self
    }
}

impl ApiRequest for CreateConversationRequest {
    const METHOD: &'static str = "conversations.create";

    fn form_fields(&self) -> FormFields {
        FormFields::new()
            .text("name", self.name.as_str())
            .flag("is_private", self.is_private)
    }
}

/// Request to get conversation info
#[derive(Debug, Clone)]
pub struct ConversationInfoRequest {
    /// Channel ID
    pub channel: ChannelId,
    /// Include locale info
    pub include_locale: bool,
}

impl ConversationInfoRequest {
    /// Create a new request
    pub fn new(channel: impl Into<ChannelId>) -> Self {
        Self {
            channel: channel.into(),
            include_locale: false,
        }
    }

    /// Include locale information
    pub fn include_locale(mut self, include: bool) -> Self {
        self.include_locale = include;
        self
    }
}

impl ApiRequest for ConversationInfoRequest {
    const METHOD: &'static str = "conversations.info";

    fn form_fields(&self) -> FormFields {
        FormFields::new()
            .text("channel", self.channel.as_str())
            .flag("include_locale", self.include_locale)
    }
}

/// Request to join a conversation
#[derive(Debug, Clone)]
pub struct JoinConversationRequest {
    /// Channel ID
    pub channel: ChannelId,
}

impl JoinConversationRequest {
    /// Create a new request
    pub fn new(channel: impl Into<ChannelId>) -> Self {
        Self {
            channel: channel.into(),
        }
    }
}

impl ApiRequest for JoinConversationRequest {
    const METHOD: &'static str = "conversations.join";

    fn form_fields(&self) -> FormFields {
        FormFields::new().text("channel", self.channel.as_str())
    }
}

/// Request to leave a conversation
#[derive(Debug, Clone)]
pub struct LeaveConversationRequest {
    /// Channel ID
    pub channel: ChannelId,
}

impl LeaveConversationRequest {
    /// Create a new request
    pub fn new(channel: impl Into<ChannelId>) -> Self {
        Self {
            channel: channel.into(),
        }
    }
}

impl ApiRequest for LeaveConversationRequest {
    const METHOD: &'static str = "conversations.leave";

    fn form_fields(&self) -> FormFields {
        FormFields::new().text("channel", self.channel.as_str())
    }
}

/// Request to list conversations
#[derive(Debug, Clone, Default)]
pub struct ListConversationsRequest {
    /// Cursor for pagination, empty for the first page
    pub cursor: Cursor,
    /// Page size, 0 for the service default
    pub limit: u32,
    /// Exclude archived channels
    pub exclude_archived: bool,
    /// Types of conversations to include, empty for the service default
    pub types: Vec<ChannelType>,
}

impl ListConversationsRequest {
    /// Create a new request
    pub fn new() -> Self {
        Self::default()
    }

    /// Set pagination cursor
    pub fn cursor(mut self, cursor: impl Into<Cursor>) -> Self {
        self.cursor = cursor.into();
        self
    }

    /// Set result limit
    pub fn limit(mut self, n: u32) -> Self {
        self.limit = n;
        self
    }

    /// Exclude archived channels
    pub fn exclude_archived(mut self, exclude: bool) -> Self {
        self.exclude_archived = exclude;
        self
    }

    /// Set conversation types
    pub fn types(mut self, types: &[ChannelType]) -> Self {
        self.types = types.to_vec();
        self
    }
}

impl ApiRequest for ListConversationsRequest {
    const METHOD: &'static str = "conversations.list";

    fn form_fields(&self) -> FormFields {
        let fields = FormFields::new()
            .cursor(&self.cursor)
            .count("limit", self.limit)
            .flag_if_set("exclude_archived", self.exclude_archived);
        if self.types.is_empty() {
            fields
        } else {
            fields.list("types", self.types.iter().map(|t| t.as_api_filter()))
        }
    }
}
