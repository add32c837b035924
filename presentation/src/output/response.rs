//! JSON bodies returned to relay clients

use relay_application::ToolLoopOutput;
use serde_json::{Map, Value, json};

/// Status and body for a finished relay run
///
/// Failures are passed through with the backend's status and body. Success
/// yields `{"response", "tool_call"?, "tool_result"?}` with status 200.
pub fn relay_response(output: &ToolLoopOutput) -> (u16, Value) {
    if !output.is_success() {
        return (output.status(), output.reply.body.clone());
    }

    let mut body = Map::new();
    body.insert(
        "response".to_string(),
        Value::String(output.response_text().to_string()),
    );
    if let Some(call) = &output.tool_call {
        body.insert("tool_call".to_string(), call.to_descriptor());
    }
    if let Some(result) = &output.tool_result {
        body.insert(
            "tool_result".to_string(),
            json!({ "status": result.status, "data": result.data }),
        );
    }
    (200, Value::Object(body))
}

/// `{"error": message}`
pub fn error_body(message: &str) -> Value {
    json!({ "error": message })
}
