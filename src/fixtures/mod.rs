//! Test fixtures for Slack API responses.
//!
//! Provides realistic test data for unit tests.

use crate::types::*;
use serde_json::json;

/// Create a fixture channel
pub fn channel() -> Channel {
    Channel {
        group: GroupConversation {
            conversation: Conversation {
                id: ChannelId::new("C1234567890"),
                created: JsonTime(1234567890),
                is_open: false,
                last_read: Some(Timestamp::new("1234567890.123456")),
                latest: None,
                unread_count: 5,
                unread_count_display: 3,
            },
            name: "general".to_string(),
            creator: "U1234567890".to_string(),
            is_archived: false,
            members: vec![UserId::new("U1234567890"), UserId::new("U0987654321")],
            topic: Topic {
                value: "General discussion".to_string(),
                creator: "U1234567890".to_string(),
                last_set: JsonTime(1234567890),
            },
            purpose: Purpose {
                value: "A channel for general discussions".to_string(),
                creator: "U1234567890".to_string(),
                last_set: JsonTime(1234567890),
            },
        },
        is_channel: true,
        is_group: false,
        is_im: false,
        is_mpim: false,
        is_private: false,
        is_general: true,
        is_member: true,
        locale: None,
    }
}

/// Create a fixture private channel
pub fn private_channel() -> Channel {
    let mut ch = channel();
    ch.group.conversation.id = ChannelId::new("G1234567890");
    ch.group.name = "private-channel".to_string();
    ch.is_channel = false;
    ch.is_group = true;
    ch.is_private = true;
    ch.is_general = false;
    ch
}

/// Create a fixture DM channel
pub fn dm_channel() -> Channel {
    let mut ch = channel();
    ch.group = GroupConversation {
        conversation: Conversation {
            id: ChannelId::new("D1234567890"),
            created: JsonTime(1234567890),
            is_open: true,
            last_read: None,
            latest: Some(message()),
            unread_count: 0,
            unread_count_display: 0,
        },
        name: String::new(),
        creator: String::new(),
        is_archived: false,
        members: vec![],
        topic: Topic::default(),
        purpose: Purpose::default(),
    };
    ch.is_channel = false;
    ch.is_im = true;
    ch.is_private = true;
    ch.is_general = false;
    ch
}

/// Create a fixture message
pub fn message() -> Message {
    Message {
        message_type: "message".to_string(),
        subtype: None,
        text: Some("Hello, World!".to_string()),
        user: Some(UserId::new("U1234567890")),
        bot_id: None,
        ts: Timestamp::new("1234567890.123456"),
        thread_ts: None,
    }
}

/// Create fixture JSON responses
pub mod responses {
    use super::*;

    /// Create an OK response
    pub fn ok() -> serde_json::Value {
        json!({ "ok": true })
    }

    /// Create a response carrying a single channel
    pub fn channel(channel: &Channel) -> serde_json::Value {
        json!({
            "ok": true,
            "channel": channel
        })
    }

    /// Create a conversations.members page
    pub fn members_page(members: &[&str], next_cursor: &str) -> serde_json::Value {
        json!({
            "ok": true,
            "members": members,
            "response_metadata": {
                "next_cursor": next_cursor
            }
        })
    }

    /// Create a conversations.list response
    pub fn conversations_list() -> serde_json::Value {
        json!({
            "ok": true,
            "channels": [
                {
                    "id": "C1234567890",
                    "name": "general",
                    "is_channel": true,
                    "is_member": true,
                    "created": 1234567890
                },
                {
                    "id": "C0987654321",
                    "name": "random",
                    "is_channel": true,
                    "is_member": true,
                    "created": "1234567890"
                }
            ],
            "response_metadata": {
                "next_cursor": ""
            }
        })
    }

    /// Create a conversations.close response
    pub fn close(no_op: bool, already_closed: bool) -> serde_json::Value {
        json!({
            "ok": true,
            "no_op": no_op,
            "already_closed": already_closed
        })
    }

    /// Create an error response
    pub fn error(code: &str) -> serde_json::Value {
        json!({
            "ok": false,
            "error": code
        })
    }
}
