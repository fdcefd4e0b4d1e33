//! Configuration management for the Slack client.
//!
//! Supports configuration via:
//! - Explicit values
//! - Environment variables
//! - Builder pattern
//!
//! The credential and base URL are fixed once the client is built.

use crate::errors::{ConfigurationError, SlackError, SlackResult};
use http::HeaderMap;
use secrecy::{ExposeSecret, SecretString};
use std::time::Duration;
use url::Url;

/// Token type enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenType {
    /// Bot token (xoxb-*)
    Bot,
    /// User token (xoxp-*)
    User,
}

impl TokenType {
    /// Detect token type from prefix
    pub fn from_token(token: &str) -> Result<Self, ConfigurationError> {
        if token.starts_with("xoxb-") {
            Ok(TokenType::Bot)
        } else if token.starts_with("xoxp-") {
            Ok(TokenType::User)
        } else {
            // app-level xapp- tokens only open Socket Mode connections
            Err(ConfigurationError::InvalidToken(
                "Token must start with xoxb- or xoxp-".to_string(),
            ))
        }
    }
}

/// Secure wrapper for the Slack credential
#[derive(Clone)]
pub struct SlackToken {
    token: SecretString,
    token_type: TokenType,
}

impl SlackToken {
    /// Create a new token
    pub fn new(token: impl Into<String>) -> Result<Self, ConfigurationError> {
        let token_str = token.into();
        let token_type = TokenType::from_token(&token_str)?;
        Ok(Self {
            token: SecretString::new(token_str),
            token_type,
        })
    }

    /// Get the token type
    pub fn token_type(&self) -> TokenType {
        self.token_type
    }

    /// Expose the token for the `token` form field
    pub(crate) fn expose(&self) -> &str {
        self.token.expose_secret()
    }
}

impl std::fmt::Debug for SlackToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SlackToken({:?}, [REDACTED])", self.token_type)
    }
}

/// Configuration for the Slack client
#[derive(Clone)]
pub struct SlackConfig {
    /// Credential attached to every request
    pub(crate) token: Option<SlackToken>,
    /// Base URL for API requests
    pub base_url: Url,
    /// Request timeout
    pub timeout: Duration,
    /// Default headers
    pub default_headers: HeaderMap,
}

impl std::fmt::Debug for SlackConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SlackConfig")
            .field("token", &self.token.as_ref().map(|t| t.token_type))
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl Default for SlackConfig {
    fn default() -> Self {
        Self {
            token: None,
            base_url: Url::parse(crate::DEFAULT_BASE_URL).unwrap(),
            timeout: Duration::from_secs(crate::DEFAULT_TIMEOUT_SECS),
            default_headers: HeaderMap::new(),
        }
    }
}

impl SlackConfig {
    /// Create a new configuration builder
    pub fn builder() -> SlackConfigBuilder {
        SlackConfigBuilder::new()
    }

    /// Create configuration from environment variables
    ///
    /// Reads `SLACK_BOT_TOKEN` (falling back to `SLACK_USER_TOKEN`),
    /// `SLACK_BASE_URL` and `SLACK_TIMEOUT` (seconds).
    pub fn from_env() -> SlackResult<Self> {
        let mut builder = SlackConfigBuilder::new();

        if let Ok(token) = std::env::var("SLACK_BOT_TOKEN") {
            builder = builder.token(&token)?;
        } else if let Ok(token) = std::env::var("SLACK_USER_TOKEN") {
            builder = builder.token(&token)?;
        }

        if let Ok(url) = std::env::var("SLACK_BASE_URL") {
            builder = builder.base_url(&url)?;
        }

        if let Ok(timeout) = std::env::var("SLACK_TIMEOUT") {
            if let Ok(secs) = timeout.parse::<u64>() {
                builder = builder.timeout(Duration::from_secs(secs));
            }
        }

        builder.build()
    }

    /// Get the token if available
    pub fn token(&self) -> Option<&SlackToken> {
        self.token.as_ref()
    }

    /// Build the full URL for an API method
    pub fn build_url(&self, method: &str) -> String {
        let base = self.base_url.as_str().trim_end_matches('/');
        let path = method.trim_start_matches('/');
        format!("{}/{}", base, path)
    }

    /// Validate the configuration
    pub fn validate(&self) -> SlackResult<()> {
        if self.token.is_none() {
            return Err(SlackError::Configuration(ConfigurationError::MissingToken));
        }
        Ok(())
    }
}

/// Builder for SlackConfig
#[derive(Debug, Default)]
pub struct SlackConfigBuilder {
    config: SlackConfig,
}

impl SlackConfigBuilder {
    /// Create a new builder
    pub fn new() -> Self {
        Self {
            config: SlackConfig::default(),
        }
    }

    /// Set the token
    pub fn token(mut self, token: &str) -> Result<Self, ConfigurationError> {
        self.config.token = Some(SlackToken::new(token)?);
        Ok(self)
    }

    /// Set the base URL
    pub fn base_url(mut self, url: &str) -> Result<Self, ConfigurationError> {
        self.config.base_url =
            Url::parse(url).map_err(|e| ConfigurationError::InvalidConfiguration {
                message: format!("Invalid URL: {}", e),
            })?;
        Ok(self)
    }

    /// Set the timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    /// Add a default header
    pub fn default_header(mut self, name: &str, value: &str) -> Self {
        if let Ok(header_name) = name.parse::<http::header::HeaderName>() {
            if let Ok(header_value) = value.parse::<http::header::HeaderValue>() {
                self.config.default_headers.insert(header_name, header_value);
            }
        }
        self
    }

    /// Build the configuration
    pub fn build(self) -> SlackResult<SlackConfig> {
        self.config.validate()?;
        Ok(self.config)
    }

    /// Build the configuration without validation (for testing)
    pub fn build_unchecked(self) -> SlackConfig {
        self.config
    }
}
