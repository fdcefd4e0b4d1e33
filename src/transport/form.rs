//! Form-encoded request parameters.
//!
//! Optional parameters left at their zero value are omitted entirely, so the
//! remote side applies its own default. An explicit zero cannot be sent.

use crate::types::Cursor;

/// A typed request that maps onto one API method
pub trait ApiRequest {
    /// Dotted method name used as the URL path segment
    const METHOD: &'static str;

    /// Operation-specific form fields, without the credential
    fn form_fields(&self) -> FormFields;
}

/// Ordered key/value pairs submitted as the request body
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormFields(Vec<(String, String)>);

impl FormFields {
    /// Create an empty field set
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a field unconditionally
    pub fn text(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.0.push((key.into(), value.into()));
        self
    }

    /// Add a field only when the value is non-empty
    pub fn text_if_set(self, key: impl Into<String>, value: &str) -> Self {
        if value.is_empty() {
            self
        } else {
            self.text(key, value)
        }
    }

    /// Add a cursor only when it is non-empty
    pub fn cursor(self, cursor: &Cursor) -> Self {
        self.text_if_set("cursor", cursor.as_str())
    }

    /// Add a numeric field only when it is non-zero
    pub fn count(self, key: impl Into<String>, value: u32) -> Self {
        if value == 0 {
            self
        } else {
            self.text(key, value.to_string())
        }
    }

    /// Add a boolean field as `"true"` / `"false"`
    pub fn flag(self, key: impl Into<String>, value: bool) -> Self {
        self.text(key, if value { "true" } else { "false" })
    }

    /// Add a boolean field only when it is `true`
    pub fn flag_if_set(self, key: impl Into<String>, value: bool) -> Self {
        if value {
            self.flag(key, true)
        } else {
            self
        }
    }

    /// Add a list as a single comma-joined field
    pub fn list<I, S>(self, key: impl Into<String>, items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let joined = items
            .into_iter()
            .map(|item| item.as_ref().to_string())
            .collect::<Vec<_>>()
            .join(",");
        self.text(key, joined)
    }

    /// Append all fields of `other`, keeping order
    pub fn merge(mut self, other: FormFields) -> Self {
        self.0.extend(other.0);
        self
    }

    /// Look up the first value for a key
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Whether a key is present
    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Keys in submission order
    pub fn keys(&self) -> Vec<&str> {
        self.0.iter().map(|(k, _)| k.as_str()).collect()
    }

    /// Number of fields
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True when there are no fields
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Borrow the pairs
    pub fn as_slice(&self) -> &[(String, String)] {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    #[test]
    fn test_zero_values_are_omitted() {
        let fields = FormFields::new()
            .cursor(&Cursor::default())
            .count("limit", 0)
            .text_if_set("team_id", "")
            .flag_if_set("exclude_archived", false);
        assert!(fields.is_empty());
    }

    #[test]
    fn test_set_values_are_kept_in_order() {
        let fields = FormFields::new()
            .text("channel", "C1")
            .cursor(&Cursor::new("dXNlcjpVMDYx"))
            .count("limit", 200);
        assert_eq!(fields.keys(), vec!["channel", "cursor", "limit"]);
        assert_eq!(fields.get("cursor"), Some("dXNlcjpVMDYx"));
        assert_eq!(fields.get("limit"), Some("200"));
    }

    #[test_case(true, "true" ; "true flag")]
    #[test_case(false, "false" ; "false flag")]
    fn test_flag_serialization(value: bool, expected: &str) {
        let fields = FormFields::new().flag("is_private", value);
        assert_eq!(fields.get("is_private"), Some(expected));
    }

    #[test]
    fn test_list_is_comma_joined() {
        let fields = FormFields::new().list("users", ["U1", "U2"]);
        assert_eq!(fields.len(), 1);
        assert_eq!(fields.get("users"), Some("U1,U2"));
    }

    #[test]
    fn test_merge_appends() {
        let fields = FormFields::new()
            .text("token", "xoxb-1")
            .merge(FormFields::new().text("channel", "C1"));
        assert_eq!(fields.keys(), vec!["token", "channel"]);
    }
}
