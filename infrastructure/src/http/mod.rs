//! HTTP adapters for the device service and the generation backend
//!
//! Both backends speak JSON on success and on failure, so responses are
//! decoded the same way regardless of status.

mod device_client;
mod model_client;

pub use device_client::HttpDeviceClient;
pub use model_client::OllamaModelClient;

use relay_application::{BackendReply, ClientError, ClientResult};

/// Decode a response body as JSON, keeping the status
pub(crate) async fn read_reply(response: reqwest::Response) -> ClientResult {
    let status = response.status().as_u16();
    let bytes = response.bytes().await.map_err(request_error)?;
    let body = serde_json::from_slice(&bytes).map_err(|e| ClientError::InvalidBody {
        status,
        message: e.to_string(),
    })?;
    Ok(BackendReply::new(status, body))
}

/// Classify a reqwest failure where no usable response was received
pub(crate) fn request_error(e: reqwest::Error) -> ClientError {
    if e.is_timeout() {
        ClientError::Timeout(e.to_string())
    } else {
        ClientError::Transport(e.to_string())
    }
}

pub(crate) fn build_client() -> Result<reqwest::Client, ClientError> {
    reqwest::Client::builder()
        .user_agent(concat!("home-relay/", env!("CARGO_PKG_VERSION")))
        .build()
        .map_err(|e| ClientError::Transport(format!("failed to create HTTP client: {}", e)))
}
