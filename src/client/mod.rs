//! Slack client implementation.
//!
//! Provides the main entry point for calling the conversations API.

use crate::config::SlackConfig;
use crate::errors::{ConfigurationError, SlackResult};
use crate::services::{ConversationsService, ConversationsServiceTrait};
use crate::transport::{HttpTransport, ReqwestTransport};
use std::sync::Arc;
use tracing::debug;

/// Trait defining the Slack client interface
pub trait SlackClient: Send + Sync {
    /// Get the configuration
    fn config(&self) -> &SlackConfig;

    /// Get the conversations service
    fn conversations(&self) -> &dyn ConversationsServiceTrait;
}

/// Main Slack client implementation.
///
/// The credential and transport are fixed at construction; clones share
/// them.
#[derive(Clone)]
pub struct SlackClientImpl {
    config: Arc<SlackConfig>,
    transport: Arc<dyn HttpTransport>,
    conversations_service: ConversationsService,
}

impl SlackClientImpl {
    /// Create a new Slack client with the given configuration
    pub fn new(config: SlackConfig) -> SlackResult<Self> {
        let transport = Arc::new(ReqwestTransport::new(config.timeout)?);
        Self::with_transport(config, transport)
    }

    /// Create a client that sends through `transport`
    pub fn with_transport(config: SlackConfig, transport: Arc<dyn HttpTransport>) -> SlackResult<Self> {
        config.validate()?;
        let token = config
            .token()
            .cloned()
            .ok_or(ConfigurationError::MissingToken)?;

        let base_url = config.build_url("");
        debug!(base_url = %base_url, token_type = ?token.token_type(), "Creating Slack client");

        let conversations_service = ConversationsService::new(
            transport.clone(),
            token,
            base_url,
            config.default_headers.clone(),
        );

        Ok(Self {
            config: Arc::new(config),
            transport,
            conversations_service,
        })
    }

    /// Get a reference to the HTTP transport
    pub fn transport(&self) -> &Arc<dyn HttpTransport> {
        &self.transport
    }

    /// Get a reference to the base URL
    pub fn base_url(&self) -> &str {
        self.config.base_url.as_str()
    }

    /// Build a full URL for an API method
    pub fn build_url(&self, method: &str) -> String {
        self.config.build_url(method)
    }

    /// Get the conversations service
    pub fn conversations(&self) -> &ConversationsService {
        &self.conversations_service
    }
}

impl SlackClient for SlackClientImpl {
    fn config(&self) -> &SlackConfig {
        &self.config
    }

    fn conversations(&self) -> &dyn ConversationsServiceTrait {
        &self.conversations_service
    }
}

impl std::fmt::Debug for SlackClientImpl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SlackClientImpl")
            .field("config", &self.config)
            .finish()
    }
}
