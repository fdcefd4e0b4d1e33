//! Conversations service for Slack API.
//!
//! Provides the `conversations.*` methods for channels, private groups and
//! direct messages.

mod requests;
mod responses;
mod service;

pub use requests::*;
pub use responses::*;
pub use service::*;
