//! HTTP transport layer for the Slack client.
//!
//! Every API method is a form-encoded POST whose JSON body is wrapped in the
//! `{"ok": ..., "error": ...}` envelope. The transport only moves bytes;
//! [`decode_envelope`] turns them into a typed result.

mod form;

pub use form::{ApiRequest, FormFields};

use crate::errors::{SlackError, SlackResult, TransportError};
use crate::observability::redact_form_fields;
use crate::types::SlackResponse;
use async_trait::async_trait;
use bytes::Bytes;
use http::{HeaderMap, StatusCode};
use reqwest::{Client, ClientBuilder};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, instrument, warn};

/// Error code used when a failed envelope carries no `error` field
pub const UNKNOWN_ERROR_CODE: &str = "unknown_error";

/// HTTP transport trait for making API requests
#[async_trait]
pub trait HttpTransport: Send + Sync {
    /// POST a form-encoded body and return the raw response
    async fn send_form(&self, request: FormRequest) -> Result<TransportResponse, TransportError>;
}

/// Form-encoded POST request
#[derive(Debug, Clone)]
pub struct FormRequest {
    /// Full URL
    pub url: String,
    /// Request headers
    pub headers: HeaderMap,
    /// Form fields
    pub fields: FormFields,
    /// Request timeout
    pub timeout: Option<Duration>,
}

impl FormRequest {
    /// Create a new form POST request
    pub fn post(url: impl Into<String>, headers: HeaderMap, fields: FormFields) -> Self {
        Self {
            url: url.into(),
            headers,
            fields,
            timeout: None,
        }
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

/// Raw response from a successful round trip
#[derive(Debug, Clone)]
pub struct TransportResponse {
    /// HTTP status code
    pub status: u16,
    /// Response body
    pub body: Bytes,
}

impl TransportResponse {
    /// Create a 200 response
    pub fn ok(body: impl Into<Bytes>) -> Self {
        Self {
            status: 200,
            body: body.into(),
        }
    }
}

/// Decode a response body into the envelope for payload `T`.
///
/// A body that is not a JSON object, an `ok` or `error` field of the wrong
/// type, or a successful envelope whose payload does not match `T`, is a
/// transport failure. `"ok": false` (or a missing `ok`) is a remote failure
/// and the payload is never looked at.
pub fn decode_envelope<T: DeserializeOwned>(body: &[u8]) -> SlackResult<SlackResponse<T>> {
    let json: serde_json::Value = serde_json::from_slice(body).map_err(TransportError::from)?;

    let Some(envelope) = json.as_object() else {
        return Err(malformed("response body is not a JSON object").into());
    };

    let ok = match envelope.get("ok") {
        None | Some(Value::Null) => false,
        Some(Value::Bool(ok)) => *ok,
        Some(other) => return Err(malformed(format!("`ok` is not a boolean: {}", other)).into()),
    };

    if !ok {
        let code = match envelope.get("error") {
            None | Some(Value::Null) => UNKNOWN_ERROR_CODE,
            Some(Value::String(code)) if code.is_empty() => UNKNOWN_ERROR_CODE,
            Some(Value::String(code)) => code.as_str(),
            Some(other) => {
                return Err(malformed(format!("`error` is not a string: {}", other)).into())
            }
        };
        return Err(SlackError::api(code));
    }

    serde_json::from_value(json).map_err(|e| SlackError::Transport(TransportError::from(e)))
}

fn malformed(message: impl Into<String>) -> TransportError {
    TransportError::Decode {
        message: message.into(),
    }
}

/// Default HTTP transport implementation using reqwest
pub struct ReqwestTransport {
    client: Client,
    default_timeout: Duration,
}

impl ReqwestTransport {
    /// Create a new transport with the given timeout
    pub fn new(timeout: Duration) -> Result<Self, TransportError> {
        let client = ClientBuilder::new()
            .timeout(timeout)
            .pool_max_idle_per_host(10)
            .build()
            .map_err(|e| TransportError::Http(e.to_string()))?;

        Ok(Self {
            client,
            default_timeout: timeout,
        })
    }

    /// Create a new transport with a pre-built client
    pub fn with_client(client: Client, default_timeout: Duration) -> Self {
        Self {
            client,
            default_timeout,
        }
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    #[instrument(skip(self, request), fields(url = %request.url))]
    async fn send_form(&self, request: FormRequest) -> Result<TransportResponse, TransportError> {
        let timeout = request.timeout.unwrap_or(self.default_timeout);

        debug!(form = %redact_form_fields(request.fields.as_slice()), "Sending request");

        let response = self
            .client
            .post(&request.url)
            .headers(request.headers)
            .form(request.fields.as_slice())
            .timeout(timeout)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            warn!(status = %status, "Request failed with non-success status");
            let retry_after = if status == StatusCode::TOO_MANY_REQUESTS {
                response
                    .headers()
                    .get("Retry-After")
                    .and_then(|v| v.to_str().ok())
                    .and_then(|v| v.parse::<u64>().ok())
                    .map(Duration::from_secs)
            } else {
                None
            };
            return Err(TransportError::Status {
                status: status.as_u16(),
                retry_after,
            });
        }

        let body = response.bytes().await?;
        debug!(response_body = %String::from_utf8_lossy(&body), "Received response");

        Ok(TransportResponse {
            status: status.as_u16(),
            body,
        })
    }
}

impl std::fmt::Debug for ReqwestTransport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReqwestTransport")
            .field("default_timeout", &self.default_timeout)
            .finish()
    }
}
