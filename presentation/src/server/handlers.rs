//! HTTP handlers

use super::RelayState;
use crate::output::response::{error_body, relay_response};
use crate::server::static_files::read_static;
use axum::{
    Json,
    body::Bytes,
    extract::State,
    http::{Method, StatusCode, Uri, header},
    response::{IntoResponse, Response},
};
use relay_application::{DeviceApi, ModelGateway};
use relay_domain::{ToolCall, UserPrompt};
use serde_json::{Value, json};
use std::sync::Arc;
use tracing::info;

/// JSON response with an arbitrary backend status
pub fn json_response(status: u16, body: Value) -> Response {
    let status = StatusCode::from_u16(status).unwrap_or(StatusCode::BAD_GATEWAY);
    (status, Json(body)).into_response()
}

fn bad_request(message: &str) -> Response {
    json_response(400, error_body(message))
}

fn not_found() -> Response {
    json_response(404, error_body("not found"))
}

/// Decode a request body, naming the problem the way clients expect
fn read_json(body: &[u8]) -> Result<Value, &'static str> {
    if body.is_empty() {
        return Err("missing body");
    }
    serde_json::from_slice(body).map_err(|_| "invalid json")
}

/// Handler for GET /health
pub async fn health() -> impl IntoResponse {
    Json(json!({ "status": "ok" }))
}

/// Handler for POST /api/generate
pub async fn generate<D, M>(State(state): State<Arc<RelayState<D, M>>>, body: Bytes) -> Response
where
    D: DeviceApi + 'static,
    M: ModelGateway + 'static,
{
    let payload = match read_json(&body) {
        Ok(payload) => payload,
        Err(message) => return bad_request(message),
    };
    let prompt = payload
        .get("prompt")
        .and_then(Value::as_str)
        .map(str::trim)
        .unwrap_or("");
    let Ok(prompt) = UserPrompt::try_new(prompt) else {
        return bad_request("missing prompt");
    };

    info!("Dashboard prompt: {}", prompt);
    let output = state.relay.execute(prompt).await;
    let (status, body) = relay_response(&output);
    json_response(status, body)
}

/// Handler for POST /tools/smart_home
pub async fn smart_home<D, M>(State(state): State<Arc<RelayState<D, M>>>, body: Bytes) -> Response
where
    D: DeviceApi + 'static,
    M: ModelGateway + 'static,
{
    let payload = match read_json(&body) {
        Ok(payload) => payload,
        Err(message) => return bad_request(message),
    };

    let call = ToolCall::from_descriptor(&payload);
    info!("Direct tool call: {}", call);
    let result = state.executor.execute(&call).await;
    json_response(result.status, result.data)
}

/// Everything not routed: static files for `GET`, 404 otherwise
pub async fn fallback<D, M>(
    State(state): State<Arc<RelayState<D, M>>>,
    method: Method,
    uri: Uri,
) -> Response
where
    D: DeviceApi + 'static,
    M: ModelGateway + 'static,
{
    if method != Method::GET {
        return not_found();
    }
    match read_static(&state.static_dir, uri.path()).await {
        Some((content, content_type)) => {
            ([(header::CONTENT_TYPE, content_type)], content).into_response()
        }
        None => not_found(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_json() {
        assert_eq!(read_json(b""), Err("missing body"));
        assert_eq!(read_json(b"{nope"), Err("invalid json"));
        assert_eq!(read_json(br#"{"prompt":"hi"}"#), Ok(json!({"prompt": "hi"})));
    }

    #[test]
    fn test_json_response_keeps_backend_status() {
        assert_eq!(json_response(207, json!([])).status(), StatusCode::MULTI_STATUS);
        assert_eq!(json_response(504, json!({})).status(), StatusCode::GATEWAY_TIMEOUT);
    }
}
