//! Slack Conversations Client
//!
//! Typed client for the Slack `conversations.*` Web API methods with:
//! - One entry point per method, plus a `*_with_context` form that honours a
//!   cancellation token and deadline
//! - Envelope decoding that separates transport failures from `"ok": false`
//! - Cursor pagination helpers
//! - Tracing spans with credential redaction
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use slack_conversations::services::conversations::{
//!     ConversationMembersRequest, ConversationsServiceTrait,
//! };
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Create client from environment
//!     let client = slack_conversations::create_client_from_env()?;
//!
//!     let page = client
//!         .conversations()
//!         .members(ConversationMembersRequest::new("C1234567890"))
//!         .await?;
//!
//!     println!("{} members, next cursor {:?}", page.len(), page.next_cursor);
//!     Ok(())
//! }
//! ```
//!
//! # Features
//!
//! - `rustls` - TLS via rustls (default)
//! - `native-tls` - TLS via the platform library

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

// Core modules
pub mod client;
pub mod config;
pub mod context;
pub mod errors;
pub mod pagination;
pub mod transport;
pub mod types;

// Services
pub mod services;

// Observability
pub mod observability;

// Testing utilities
pub mod fixtures;
pub mod mocks;

// Tests
#[cfg(test)]
mod tests;

// Re-exports for convenience
pub use client::{SlackClient, SlackClientImpl};
pub use config::{SlackConfig, SlackConfigBuilder};
pub use context::RequestContext;
pub use errors::{SlackError, SlackResult, TransportError};
pub use pagination::{CursorPage, CursorPager};

/// Default base URL for Slack API
pub const DEFAULT_BASE_URL: &str = "https://slack.com/api";

/// Default timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Create a Slack client with the given configuration
pub fn create_client(config: SlackConfig) -> SlackResult<SlackClientImpl> {
    SlackClientImpl::new(config)
}

/// Create a Slack client from environment variables
///
/// Reads:
/// - `SLACK_BOT_TOKEN` - Bot token (xoxb-*)
/// - `SLACK_USER_TOKEN` - User token (xoxp-*), used when no bot token is set
/// - `SLACK_BASE_URL` - API base URL override
/// - `SLACK_TIMEOUT` - Request timeout in seconds
pub fn create_client_from_env() -> SlackResult<SlackClientImpl> {
    let config = SlackConfig::from_env()?;
    create_client(config)
}
