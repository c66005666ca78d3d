//! Response mapping: HTTP outcomes to tool payloads or [`OmiError`]s.

use reqwest::StatusCode;
use serde_json::{json, Map, Value};

use crate::omi::error::OmiError;

/// Wrap the array under `key` in a fresh `{ key: [...] }` object.
///
/// An absent or `null` array maps to `[]`. A body that is not JSON, or an array
/// slot holding something other than an array, is a decode error.
pub fn extract_list(key: &str, body: &str) -> Result<Value, OmiError> {
    let parsed: Value = serde_json::from_str(body)
        .map_err(|e| OmiError::Decode(format!("response body is not valid JSON: {e}")))?;

    let items = match parsed.get(key) {
        None | Some(Value::Null) => Vec::new(),
        Some(Value::Array(items)) => items.clone(),
        Some(other) => {
            return Err(OmiError::Decode(format!(
                "expected `{key}` to be an array, got {}",
                type_name(other)
            )))
        }
    };

    let mut wrapped = Map::new();
    wrapped.insert(key.to_string(), Value::Array(items));
    Ok(Value::Object(wrapped))
}

/// Build the error for a non-2xx answer. `body` is whatever could be read, possibly empty.
pub fn remote_error(status: StatusCode, body: String) -> OmiError {
    OmiError::Remote {
        status: status.as_u16(),
        status_text: status.canonical_reason().unwrap_or("").to_string(),
        body,
    }
}

/// Payload returned for a successful create call. The remote body is never inspected.
pub fn empty_payload() -> Value {
    json!({})
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
