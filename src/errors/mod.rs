//! Error types for the Slack conversations client.
//!
//! Operations fail in exactly two ways: the round trip itself failed
//! ([`TransportError`]), or the remote service answered with `"ok": false`
//! ([`SlackError::Api`]). Configuration errors only surface while building a
//! client.

use std::time::Duration;
use thiserror::Error;

/// Result type for Slack operations
pub type SlackResult<T> = Result<T, SlackError>;

/// Root error type for the client
#[derive(Error, Debug)]
pub enum SlackError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(#[from] ConfigurationError),

    /// The call never produced a usable envelope
    #[error("Transport error: {0}")]
    Transport(#[from] TransportError),

    /// The envelope reported `"ok": false`
    #[error("{code}")]
    Api {
        /// Remote error code, verbatim
        code: String,
    },
}

impl SlackError {
    /// Create a remote error from the envelope's `error` field
    pub fn api(code: impl Into<String>) -> Self {
        Self::Api { code: code.into() }
    }

    /// True when the failure happened below the envelope
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_))
    }

    /// True when the remote service rejected the call
    pub fn is_remote(&self) -> bool {
        matches!(self, Self::Api { .. })
    }

    /// Remote error code, if this is a remote error
    pub fn remote_code(&self) -> Option<&str> {
        match self {
            Self::Api { code } => Some(code),
            _ => None,
        }
    }

    /// True when the call was cancelled or ran past its deadline
    pub fn is_cancelled(&self) -> bool {
        matches!(
            self,
            Self::Transport(TransportError::Cancelled) | Self::Transport(TransportError::Timeout)
        )
    }
}

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigurationError {
    /// Missing token
    #[error("Token is missing")]
    MissingToken,

    /// Invalid token format
    #[error("Invalid token format: {0}")]
    InvalidToken(String),

    /// Invalid configuration
    #[error("Invalid configuration: {message}")]
    InvalidConfiguration {
        /// Error message
        message: String,
    },
}

/// Failures of the HTTP round trip or of decoding its body
#[derive(Error, Debug, Clone)]
pub enum TransportError {
    /// Connection failed
    #[error("Connection failed: {message}")]
    ConnectionFailed {
        /// Error message
        message: String,
    },

    /// Request timed out, either in the HTTP client or at the caller's deadline
    #[error("Request timed out")]
    Timeout,

    /// The caller cancelled the request while it was in flight
    #[error("Request cancelled")]
    Cancelled,

    /// Non-success HTTP status
    #[error("HTTP status {status}")]
    Status {
        /// Status code
        status: u16,
        /// Retry-After header, when the service sent one
        retry_after: Option<Duration>,
    },

    /// Response body could not be decoded
    #[error("Deserialization error: {message}")]
    Decode {
        /// Error message
        message: String,
    },

    /// Other HTTP client error
    #[error("HTTP error: {0}")]
    Http(String),
}

impl From<reqwest::Error> for TransportError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            TransportError::Timeout
        } else if err.is_connect() {
            TransportError::ConnectionFailed {
                message: err.to_string(),
            }
        } else if err.is_decode() {
            TransportError::Decode {
                message: err.to_string(),
            }
        } else {
            TransportError::Http(err.to_string())
        }
    }
}

impl From<serde_json::Error> for TransportError {
    fn from(err: serde_json::Error) -> Self {
        TransportError::Decode {
            message: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_message_is_code() {
        let err = SlackError::api("channel_not_found");
        assert_eq!(err.to_string(), "channel_not_found");
        assert_eq!(err.remote_code(), Some("channel_not_found"));
        assert!(err.is_remote());
        assert!(!err.is_transport());
    }

    #[test]
    fn test_transport_classification() {
        let err = SlackError::from(TransportError::Timeout);
        assert!(err.is_transport());
        assert!(err.is_cancelled());
        assert_eq!(err.remote_code(), None);

        let err = SlackError::from(TransportError::Decode {
            message: "eof".to_string(),
        });
        assert!(err.is_transport());
        assert!(!err.is_cancelled());
    }

    #[test]
    fn test_serde_error_maps_to_decode() {
        let json_err = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        assert!(matches!(
            TransportError::from(json_err),
            TransportError::Decode { .. }
        ));
    }

    #[test]
    fn test_configuration_error_kind() {
        let err = SlackError::from(ConfigurationError::MissingToken);
        assert!(matches!(
            err,
            SlackError::Configuration(ConfigurationError::MissingToken)
        ));
        assert!(!err.is_remote());
        assert!(!err.is_transport());
        assert_eq!(err.remote_code(), None);
    }
}
