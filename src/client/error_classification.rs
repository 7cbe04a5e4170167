//! Envelope interpretation and error classification.
//!
//! A decoded body is one of:
//! - `{"error": {...}}`: the whole call failed; the code picks the error kind.
//! - `{"response": ...}`: one record per element (a non-array counts as one element),
//!   with item-level error codes kept on the records.
//! - anything else: an invalid response.

use crate::error_code::{ErrorCategory, ERROR_UNKNOWN};
use crate::types::ClientResponse;
use crate::{Error, Result};
use serde_json::Value;
use tracing::{debug, warn};

/// Error code and message found on one JSON object.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ItemError {
    pub code: i64,
    pub message: String,
}

/// Extracts `error_code` and the message of an object.
///
/// `error_msg` wins over `error_desc`. A bare scalar is taken as the message
/// itself with code `0`.
pub fn parse_error(value: &Value) -> ItemError {
    let Value::Object(obj) = value else {
        return ItemError {
            code: 0,
            message: text_of(value),
        };
    };

    let code = obj.get("error_code").map(code_of).unwrap_or(0);
    let mut message = String::new();
    if let Some(desc) = present(obj.get("error_desc")) {
        message = text_of(desc);
    }
    if let Some(msg) = present(obj.get("error_msg")) {
        message = text_of(msg);
    }
    ItemError { code, message }
}

/// Turns a decoded envelope into records or a classified error.
pub fn classify_envelope(status: u16, mut envelope: Value) -> Result<Vec<ClientResponse>> {
    if let Some(error) = present(envelope.get("error")) {
        let ItemError { code, message } = parse_error(error);
        let category = ErrorCategory::classify(code).unwrap_or(ErrorCategory::Generic);
        return match category {
            ErrorCategory::Flood => {
                warn!(error_code = code, "flood control: {}", message);
                Err(Error::flood(code, message))
            }
            ErrorCategory::Access => {
                warn!(error_code = code, "access denied: {}", message);
                Err(Error::access(code, message))
            }
            ErrorCategory::Partial => {
                // Neither an error nor records: the per-item outcome is not in this envelope.
                warn!(
                    error_code = code,
                    "partial completion reported as top-level error, no records returned: {}",
                    message
                );
                Ok(Vec::new())
            }
            ErrorCategory::Generic => Err(Error::api(code, message)),
        };
    }

    let response = match envelope.get_mut("response") {
        Some(v) if !v.is_null() => v.take(),
        _ => return Err(Error::api(ERROR_UNKNOWN, "Invalid response")),
    };

    let items = match response {
        Value::Array(items) => items,
        single => vec![single],
    };

    let records: Vec<ClientResponse> = items
        .into_iter()
        .map(|item| {
            let ItemError { code, message } = if item.is_object() {
                parse_error(&item)
            } else {
                ItemError::default()
            };
            ClientResponse::new(status, item, code, message)
        })
        .collect();

    debug!(
        http_status = status,
        records = records.len(),
        item_errors = records.iter().filter(|r| r.is_error()).count(),
        "response classified"
    );
    Ok(records)
}

fn present(value: Option<&Value>) -> Option<&Value> {
    value.filter(|v| !v.is_null())
}

/// Integer code from a number or a numeric string; anything else is `0`.
fn code_of(value: &Value) -> i64 {
    match value {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().map(|f| f as i64))
            .unwrap_or(0),
        Value::String(s) => s.trim().parse().unwrap_or(0),
        _ => 0,
    }
}

fn text_of(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}
