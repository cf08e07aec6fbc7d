use serde::{Deserialize, Serialize};

/// Body of a non-success response from either endpoint.
///
/// The backend puts a human-readable message in `detail`; it may be missing,
/// and for validation failures some servers send a structured value instead
/// of a string.  Only a string `detail` counts as a message.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ErrorBody {
    /// Human-readable reason for the failure.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<serde_json::Value>,
}

impl ErrorBody {
    /// Parses an error body, tolerating bodies that are not JSON at all.
    pub fn parse(body: &str) -> Self {
        serde_json::from_str(body).unwrap_or_default()
    }

    /// The `detail` message, if the body carried a non-empty string.
    pub fn message(&self) -> Option<&str> {
        match &self.detail {
            Some(serde_json::Value::String(detail)) if !detail.is_empty() => Some(detail),
            _ => None,
        }
    }
}
