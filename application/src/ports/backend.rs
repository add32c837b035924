//! Backend reply types shared by the device and model ports
//!
//! Both backends answer with a status code and a JSON body. Failures where no
//! usable body exists at all (connection refused, timeouts, undecodable
//! payloads) are reported as [`ClientError`] so callers can tell them apart
//! from a backend that answered with an error status.

use relay_domain::ToolResult;
use serde_json::{Value, json};
use thiserror::Error;

/// Status reported for transport failures
pub const BAD_GATEWAY: u16 = 502;
/// Status reported when a backend did not answer in time
pub const GATEWAY_TIMEOUT: u16 = 504;

/// A decoded backend answer, success or not
#[derive(Debug, Clone, PartialEq)]
pub struct BackendReply {
    pub status: u16,
    pub body: Value,
}

impl BackendReply {
    pub fn new(status: u16, body: Value) -> Self {
        Self { status, body }
    }

    /// 2xx
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// The `error` field of the body, stringified if it is not a string
    pub fn error_message(&self) -> Option<String> {
        match self.body.get("error")? {
            Value::String(s) => Some(s.clone()),
            Value::Null => None,
            other => Some(other.to_string()),
        }
    }

    /// The `response` field of a generate reply, or `""`
    pub fn response_text(&self) -> &str {
        self.body
            .get("response")
            .and_then(Value::as_str)
            .unwrap_or("")
    }

    pub fn into_tool_result(self) -> ToolResult {
        ToolResult::new(self.status, self.body)
    }
}

/// Errors raised by backend clients when no decodable reply exists
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ClientError {
    #[error("Connection error: {0}")]
    Transport(String),

    #[error("Request timed out: {0}")]
    Timeout(String),

    #[error("Invalid response body (HTTP {status}): {message}")]
    InvalidBody { status: u16, message: String },
}

impl ClientError {
    /// Status used when the error is folded into a reply
    ///
    /// An undecodable body keeps the backend's status unless that status
    /// claimed success.
    pub fn status(&self) -> u16 {
        match self {
            ClientError::Transport(_) => BAD_GATEWAY,
            ClientError::Timeout(_) => GATEWAY_TIMEOUT,
            ClientError::InvalidBody { status, .. } => {
                if (200..300).contains(status) {
                    BAD_GATEWAY
                } else {
                    *status
                }
            }
        }
    }

    pub fn into_reply(self) -> BackendReply {
        BackendReply::new(self.status(), json!({ "error": self.to_string() }))
    }
}

/// Result returned by every backend port operation
pub type ClientResult = Result<BackendReply, ClientError>;

/// Collapse a client result into a reply, turning errors into error payloads
pub fn fold_reply(result: ClientResult) -> BackendReply {
    match result {
        Ok(reply) => reply,
        Err(e) => {
            tracing::warn!("Backend request failed: {}", e);
            e.into_reply()
        }
    }
}
