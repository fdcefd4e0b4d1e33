//! Span helpers for API calls.

use tracing::{span, Level, Span};

/// Create a request span for one API method call
pub fn create_request_span(method: &str) -> Span {
    span!(
        Level::INFO,
        "slack_request",
        method = %method,
        otel.kind = "client",
        otel.status_code = tracing::field::Empty,
        error.message = tracing::field::Empty,
    )
}

/// Record success on a span
pub fn record_success(span: &Span) {
    span.record("otel.status_code", "OK");
}

/// Record error on a span
pub fn record_error(span: &Span, error: &str) {
    span.record("otel.status_code", "ERROR");
    span.record("error.message", error);
}
