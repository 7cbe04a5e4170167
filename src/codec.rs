//! JSON encode/decode with failures mapped into the crate's error type.

use crate::{Error, Result};
use serde::Serialize;
use serde_json::Value;

/// Serializes a composite request parameter into the JSON string the API expects.
pub fn encode<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    serde_json::to_string(value).map_err(|e| Error::bad_response_content(e.to_string()))
}

/// Parses a response body into a generic JSON value.
pub fn decode(body: &str) -> Result<Value> {
    serde_json::from_str(body).map_err(|e| {
        Error::bad_response_content(format!("Decoding error while parsing response: {}", e))
    })
}
