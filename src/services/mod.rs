//! Service implementations for Slack API endpoints.
//!
//! Each service module groups the methods of one Web API family.

pub mod conversations;

pub use conversations::{ConversationsService, ConversationsServiceTrait};
