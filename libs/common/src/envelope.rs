//! Normalized response envelope
//!
//! Every endpoint of the portal answers with the same JSON shape:
//! `{"status": "success" | "error", "message"?: ..., ...resource fields}`.
//! The helpers here build those bodies and probe the backend's replies for
//! the same fields, so handlers never touch raw JSON keys themselves.

use serde_json::{Map, Value, json};

pub const STATUS_SUCCESS: &str = "success";
pub const STATUS_ERROR: &str = "error";

/// Build an error envelope body.
pub fn error(message: &str) -> Value {
    json!({ "status": STATUS_ERROR, "message": message })
}

/// Wrap resource fields into a success envelope. `fields` must be a JSON
/// object; its keys end up at the top level next to `status`. Anything else
/// produces a bare `{"status": "success"}` body.
pub fn success(fields: Value) -> Value {
    let mut map = match fields {
        Value::Object(map) => map,
        _ => Map::new(),
    };
    map.insert("status".to_string(), Value::String(STATUS_SUCCESS.to_string()));
    Value::Object(map)
}

/// Whether a body explicitly claims success.
pub fn is_success(body: &Value) -> bool {
    body.get("status").and_then(Value::as_str) == Some(STATUS_SUCCESS)
}

/// Whether a body explicitly signals an error.
pub fn is_error(body: &Value) -> bool {
    body.get("status").and_then(Value::as_str) == Some(STATUS_ERROR)
}

/// The body's `message` field, if it carries a string one.
pub fn message(body: &Value) -> Option<String> {
    body.get("message").and_then(Value::as_str).map(str::to_owned)
}

/// A top-level field of the body, or `fallback` when absent.
pub fn field_or(body: &Value, key: &str, fallback: Value) -> Value {
    body.get(key).cloned().unwrap_or(fallback)
}
