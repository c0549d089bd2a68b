use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Error body returned by the admin API.
///
/// `detail` is a plain string for handled errors and a list of
/// `{loc, msg, type}` objects for request validation failures.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub detail: Value,
}

impl ErrorResponse {
    /// Flattens `detail` into a single human readable message
    pub fn message(&self) -> String {
        match &self.detail {
            Value::String(s) => s.clone(),
            Value::Array(items) => {
                let msgs: Vec<String> = items
                    .iter()
                    .map(|item| match item.get("msg").and_then(Value::as_str) {
                        Some(msg) => msg.to_string(),
                        None => item.to_string(),
                    })
                    .collect();
                msgs.join("; ")
            }
            other => other.to_string(),
        }
    }
}
