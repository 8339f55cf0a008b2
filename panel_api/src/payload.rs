//! Decoded response bodies.

use serde_json::Value;

/// Fields consulted, in order, for a server-supplied error message.
const MESSAGE_FIELDS: [&str; 3] = ["detail", "error", "message"];

/// A response body as handed back to the caller.
#[derive(Clone, Debug, PartialEq)]
pub enum Payload {
    /// The body was empty.
    Null,
    /// The body parsed as JSON.
    Json(Value),
    /// The body was non-empty but not JSON.
    Text(String),
}

impl Payload {
    /// Classifies a response body. Failing to parse JSON is not an error here,
    /// the text is kept as-is instead.
    pub fn from_body(body: &str) -> Self {
        if body.is_empty() {
            return Payload::Null;
        }
        match serde_json::from_str::<Value>(body) {
            Ok(value) => Payload::Json(value),
            Err(_) => Payload::Text(body.to_string()),
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Payload::Null | Payload::Json(Value::Null))
    }

    pub fn as_json(&self) -> Option<&Value> {
        match self {
            Payload::Json(value) => Some(value),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Payload::Text(text) => Some(text),
            _ => None,
        }
    }

    /// Collapses the payload into a JSON value; text becomes a JSON string.
    pub fn into_json(self) -> Value {
        match self {
            Payload::Null => Value::Null,
            Payload::Json(value) => value,
            Payload::Text(text) => Value::String(text),
        }
    }

    /// Message for a failed response with this payload.
    ///
    /// Uses the first usable `detail`, `error` or `message` field of a JSON
    /// object, otherwise `HTTP <status>`.
    pub fn failure_message(&self, status: u16) -> String {
        self.server_message()
            .unwrap_or_else(|| format!("HTTP {}", status))
    }

    fn server_message(&self) -> Option<String> {
        let Payload::Json(Value::Object(map)) = self else {
            return None;
        };
        MESSAGE_FIELDS
            .iter()
            .filter_map(|field| map.get(*field))
            .find_map(describe)
    }
}

/// Renders one error field. Falsy values (`null`, `false`, `0`, `""`) count
/// as absent.
fn describe(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::Bool(false) => None,
        Value::Number(n) if n.as_f64() == Some(0.0) => None,
        Value::String(s) if s.is_empty() => None,
        Value::String(s) => Some(s.clone()),
        // Validation errors: [{"loc": [...], "msg": "...", ...}, ...]
        Value::Array(items) => {
            let msgs: Vec<&str> = items
                .iter()
                .filter_map(|item| item.get("msg").and_then(Value::as_str))
                .collect();
            if msgs.is_empty() {
                Some(value.to_string())
            } else {
                Some(msgs.join("; "))
            }
        }
        other => Some(other.to_string()),
    }
}
