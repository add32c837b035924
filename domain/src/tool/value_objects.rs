//! Tool domain value objects: the normalized outcome of executing a [`ToolCall`].
//!
//! [`ToolCall`]: super::entities::ToolCall

use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

/// Status reported for a batch, whatever its members returned.
pub const MULTI_STATUS: u16 = 207;

/// Result of executing a tool call.
///
/// `status` mirrors the HTTP status of the device backend (or a synthetic
/// 4xx/5xx for validation and transport failures); `data` is the decoded
/// payload passed through verbatim. For a batch, `data` is the ordered array
/// of member results and `status` is always [`MULTI_STATUS`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolResult {
    pub status: u16,
    pub data: Value,
}

impl ToolResult {
    pub fn new(status: u16, data: Value) -> Self {
        Self { status, data }
    }

    /// Failure shaped as `{"error": message}`
    pub fn error(status: u16, message: impl Into<String>) -> Self {
        Self::new(status, json!({ "error": message.into() }))
    }

    pub fn missing_id() -> Self {
        Self::error(400, "missing id")
    }

    pub fn missing_state() -> Self {
        Self::error(400, "missing state")
    }

    pub fn unsupported_action() -> Self {
        Self::error(400, "unsupported action")
    }

    /// Combine ordered member results into one batch result.
    pub fn batch(results: Vec<ToolResult>) -> Self {
        let data = results
            .into_iter()
            .map(|r| json!({ "status": r.status, "data": r.data }))
            .collect();
        Self::new(MULTI_STATUS, Value::Array(data))
    }

    /// Whether the status is in the 2xx range
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// The `error` message of the payload, if any
    pub fn error_message(&self) -> Option<&str> {
        self.data.get("error").and_then(Value::as_str)
    }
}
