//! Per-item call outcome.

use serde::Serialize;
use serde_json::Value;

/// One unit of outcome from an API call.
///
/// A call yields one record per element of the `response` payload. All records
/// of a call share the HTTP status of the exchange. Item-level failures inside
/// a batch are reported here rather than as an [`Error`](crate::Error); check
/// [`is_error`](Self::is_error) on every record.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClientResponse {
    status_code: u16,
    content: Value,
    error_code: i64,
    error_message: String,
}

impl ClientResponse {
    pub fn new(
        status_code: u16,
        content: Value,
        error_code: i64,
        error_message: impl Into<String>,
    ) -> Self {
        Self {
            status_code,
            content,
            error_code,
            error_message: error_message.into(),
        }
    }

    /// A record without an item-level error.
    pub fn success(status_code: u16, content: Value) -> Self {
        Self::new(status_code, content, 0, String::new())
    }

    /// HTTP status of the exchange this record came from.
    pub fn code(&self) -> u16 {
        self.status_code
    }

    /// Item-level error code, `0` when the item succeeded.
    pub fn error_code(&self) -> i64 {
        self.error_code
    }

    /// Item-level error message, empty when the item succeeded.
    pub fn error(&self) -> &str {
        &self.error_message
    }

    pub fn is_error(&self) -> bool {
        self.error_code != 0
    }

    /// The raw decoded item.
    pub fn content(&self) -> &Value {
        &self.content
    }

    pub fn into_content(self) -> Value {
        self.content
    }
}
