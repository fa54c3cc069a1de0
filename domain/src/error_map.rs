//! Field-level error state shared by client validation and server rejections.

use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;

/// Key under which errors that belong to no single field are stored
pub const GENERAL_ERROR_KEY: &str = "non_field_errors";

/// Field name → human-readable message. A missing key means the field is valid.
///
/// Nested payload fields use dotted keys (`in_kind_details.item_name`), for
/// errors raised locally and for errors returned by the server alike.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ErrorMap(BTreeMap<String, String>);

impl ErrorMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an error, replacing any earlier message for the same field
    pub fn insert(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.0.insert(field.into(), message.into());
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    /// Drop one field's error, leaving every other entry untouched
    pub fn clear_field(&mut self, field: &str) -> Option<String> {
        self.0.remove(field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Error that is not tied to a form field, if any
    pub fn general(&self) -> Option<&str> {
        self.get(GENERAL_ERROR_KEY)
    }

    /// Fold `other` into this map; its messages win on conflicting keys
    pub fn merge(&mut self, other: ErrorMap) {
        self.0.extend(other.0);
    }

    /// One-line rendering, e.g. `"amount: Required.; email: Invalid."`
    pub fn summary(&self) -> String {
        self.iter()
            .map(|(field, message)| format!("{}: {}", field, message))
            .collect::<Vec<_>>()
            .join("; ")
    }

    /// Flatten an error body returned by the API.
    ///
    /// Top-level keys map to fields, one level of nested objects becomes
    /// dotted keys, message lists are joined with a space, and `detail` or a
    /// non-object body is filed under [`GENERAL_ERROR_KEY`].
    pub fn from_server_payload(body: &Value) -> Self {
        let mut errors = ErrorMap::new();
        match body {
            Value::Object(fields) => {
                for (key, value) in fields {
                    let key = if key == "detail" { GENERAL_ERROR_KEY } else { key.as_str() };
                    match value {
                        Value::Object(nested) => {
                            for (nested_key, nested_value) in nested {
                                errors.insert_message(
                                    format!("{}.{}", key, nested_key),
                                    message_from(nested_value),
                                );
                            }
                        }
                        other => errors.insert_message(key.to_string(), message_from(other)),
                    }
                }
            }
            Value::Null => {}
            other => errors.insert_message(GENERAL_ERROR_KEY.to_string(), message_from(other)),
        }
        errors
    }

    fn insert_message(&mut self, field: String, message: String) {
        if !message.is_empty() {
            self.0.insert(field, message);
        }
    }
}

fn message_from(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        Value::Array(items) => items
            .iter()
            .map(message_from)
            .filter(|message| !message.is_empty())
            .collect::<Vec<_>>()
            .join(" "),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for ErrorMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut errors = ErrorMap::new();
        for (field, message) in iter {
            errors.insert(field, message);
        }
        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_clear_field_only_removes_that_field() {
        let mut errors: ErrorMap = [
            ("email", "Email is invalid."),
            ("first_name", "First name is required."),
        ]
        .into_iter()
        .collect();

        assert_eq!(errors.clear_field("email").as_deref(), Some("Email is invalid."));
        assert!(!errors.contains("email"));
        assert_eq!(errors.get("first_name"), Some("First name is required."));
        assert_eq!(errors.clear_field("email"), None);
    }

    #[test]
    fn test_server_payload_flattens_one_nested_level() {
        let errors = ErrorMap::from_server_payload(&json!({
            "amount": ["Amount should be null for in-kind donations."],
            "in_kind_details": {
                "item_name": ["This field may not be blank."],
                "quantity": ["Ensure this value is greater than or equal to 0.", "A valid integer is required."]
            }
        }));

        assert_eq!(errors.len(), 3);
        assert_eq!(errors.get("amount"), Some("Amount should be null for in-kind donations."));
        assert_eq!(errors.get("in_kind_details.item_name"), Some("This field may not be blank."));
        assert_eq!(
            errors.get("in_kind_details.quantity"),
            Some("Ensure this value is greater than or equal to 0. A valid integer is required.")
        );
    }

    #[test]
    fn test_server_detail_and_bare_bodies_become_general_errors() {
        let detail = ErrorMap::from_server_payload(&json!({ "detail": "Authentication credentials were not provided." }));
        assert_eq!(detail.general(), Some("Authentication credentials were not provided."));

        let bare = ErrorMap::from_server_payload(&json!(["Something went wrong."]));
        assert_eq!(bare.general(), Some("Something went wrong."));

        assert!(ErrorMap::from_server_payload(&Value::Null).is_empty());
    }

    #[test]
    fn test_merge_prefers_incoming_messages() {
        let mut local: ErrorMap = [("quantity", "Quantity must be positive for IN/OUT."), ("notes", "Too long.")]
            .into_iter()
            .collect();
        let server: ErrorMap = [("quantity", "Not enough stock.")].into_iter().collect();

        local.merge(server);

        assert_eq!(local.get("quantity"), Some("Not enough stock."));
        assert_eq!(local.get("notes"), Some("Too long."));
        assert_eq!(local.summary(), "notes: Too long.; quantity: Not enough stock.");
    }
}
