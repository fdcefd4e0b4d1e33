//! Logging helpers that keep the credential out of log output.

use std::fmt;

/// Form fields whose values are never logged
const SENSITIVE_FIELDS: [&str; 4] = ["token", "secret", "password", "client_secret"];

/// Wrapper for sensitive data that redacts on display
#[derive(Clone)]
pub struct Redacted<T>(T);

impl<T> Redacted<T> {
    /// Create a new redacted value
    pub fn new(value: T) -> Self {
        Self(value)
    }

    /// Get the inner value (use sparingly)
    pub fn expose(&self) -> &T {
        &self.0
    }
}

impl<T> fmt::Debug for Redacted<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[REDACTED]")
    }
}

impl<T> fmt::Display for Redacted<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[REDACTED]")
    }
}

/// Redact token from a string, preserving prefix for debugging
pub fn redact_token(token: &str) -> String {
    match token.get(..8) {
        Some(prefix) if token.len() > 8 => format!("{}...[REDACTED]", prefix),
        _ => "[REDACTED]".to_string(),
    }
}

/// Render form fields as `k=v&k=v` with sensitive values redacted
pub fn redact_form_fields(fields: &[(String, String)]) -> String {
    fields
        .iter()
        .map(|(key, value)| {
            if SENSITIVE_FIELDS.iter().any(|s| key.eq_ignore_ascii_case(s)) {
                format!("{}={}", key, redact_token(value))
            } else {
                format!("{}={}", key, value)
            }
        })
        .collect::<Vec<_>>()
        .join("&")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_redacted_display() {
        let secret = Redacted::new("my-secret-token");
        assert_eq!(format!("{}", secret), "[REDACTED]");
        assert_eq!(format!("{:?}", secret), "[REDACTED]");
        assert_eq!(secret.expose(), &"my-secret-token");
    }

    #[test]
    fn test_redact_token() {
        assert_eq!(redact_token("xoxb-123456789"), "xoxb-123...[REDACTED]");
        assert_eq!(redact_token("short"), "[REDACTED]");
    }

    #[test]
    fn test_redact_form_fields() {
        let fields = vec![
            ("token".to_string(), "xoxb-123456789".to_string()),
            ("channel".to_string(), "C123".to_string()),
        ];
        let rendered = redact_form_fields(&fields);
        assert_eq!(rendered, "token=xoxb-123...[REDACTED]&channel=C123");
    }
}
