//! Execute Tool use case.
//!
//! Turns a [`ToolCall`] into device API requests and normalizes the outcome
//! into a [`ToolResult`]. Execution never fails: validation problems become
//! 400 results without touching the device API, and transport failures
//! become 502/504 results.

use crate::ports::backend::fold_reply;
use crate::ports::device_api::DeviceApi;
use relay_domain::{ToolCall, ToolResult};
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use tracing::{debug, info};

type ToolFuture<'a> = Pin<Box<dyn Future<Output = ToolResult> + Send + 'a>>;

/// Executes tool calls against the device API.
pub struct ToolExecutor<D: DeviceApi> {
    devices: Arc<D>,
}

impl<D: DeviceApi> Clone for ToolExecutor<D> {
    fn clone(&self) -> Self {
        Self {
            devices: Arc::clone(&self.devices),
        }
    }
}

impl<D: DeviceApi> ToolExecutor<D> {
    pub fn new(devices: Arc<D>) -> Self {
        Self { devices }
    }

    /// Execute a call. Batch members run in order, one at a time.
    pub fn execute<'a>(&'a self, call: &'a ToolCall) -> ToolFuture<'a> {
        Box::pin(async move {
            match call {
                ToolCall::List => {
                    debug!("Listing devices");
                    fold_reply(self.devices.list_devices().await).into_tool_result()
                }
                ToolCall::Get { id } => {
                    if id.is_empty() {
                        return ToolResult::missing_id();
                    }
                    debug!("Fetching device {}", id);
                    fold_reply(self.devices.get_device(id).await).into_tool_result()
                }
                ToolCall::Update { id, state } => {
                    if id.is_empty() {
                        return ToolResult::missing_id();
                    }
                    let Some(patch) = state.as_object().filter(|s| !s.is_empty()) else {
                        return ToolResult::missing_state();
                    };
                    info!("Updating device {} with {}", id, state);
                    fold_reply(self.devices.update_device(id, patch).await).into_tool_result()
                }
                ToolCall::Batch { calls } => {
                    info!("Executing batch of {} calls", calls.len());
                    let mut results = Vec::with_capacity(calls.len());
                    for member in calls {
                        results.push(self.execute(member).await);
                    }
                    ToolResult::batch(results)
                }
                ToolCall::Unsupported { action } => {
                    debug!("Unsupported action: {:?}", action);
                    ToolResult::unsupported_action()
                }
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::backend::ClientError;
    use crate::use_cases::test_support::FakeDevices;
    use relay_domain::MULTI_STATUS;
    use serde_json::json;

    fn executor(devices: &Arc<FakeDevices>) -> ToolExecutor<FakeDevices> {
        ToolExecutor::new(Arc::clone(devices))
    }

    #[tokio::test]
    async fn test_update_with_empty_state_never_reaches_devices() {
        let devices = Arc::new(FakeDevices::with_lamp());
        let result = executor(&devices)
            .execute(&ToolCall::update("lamp1", json!({})))
            .await;

        assert_eq!(result, ToolResult::error(400, "missing state"));
        assert_eq!(devices.call_count(), 0);
    }

    #[tokio::test]
    async fn test_update_with_non_object_state_is_missing_state() {
        let devices = Arc::new(FakeDevices::with_lamp());
        let result = executor(&devices)
            .execute(&ToolCall::update("lamp1", json!("on")))
            .await;

        assert_eq!(result.error_message(), Some("missing state"));
        assert_eq!(devices.call_count(), 0);
    }

    #[tokio::test]
    async fn test_missing_id() {
        let devices = Arc::new(FakeDevices::with_lamp());
        let exec = executor(&devices);

        let get = exec.execute(&ToolCall::get("")).await;
        let update = exec.execute(&ToolCall::update("", json!({"on": true}))).await;

        assert_eq!(get, ToolResult::missing_id());
        assert_eq!(update, ToolResult::missing_id());
        assert_eq!(devices.call_count(), 0);
    }

    #[tokio::test]
    async fn test_get_passes_backend_status_through() {
        let devices = Arc::new(FakeDevices::with_lamp());
        let exec = executor(&devices);

        let found = exec.execute(&ToolCall::get("lamp1")).await;
        assert_eq!(found.status, 200);
        assert_eq!(found.data["id"], "lamp1");

        let missing = exec.execute(&ToolCall::get("ghost")).await;
        assert_eq!(missing, ToolResult::error(404, "device not found"));
    }

    #[tokio::test]
    async fn test_update_sends_patch() {
        let devices = Arc::new(FakeDevices::with_lamp());
        let result = executor(&devices)
            .execute(&ToolCall::update("lamp1", json!({"on": true})))
            .await;

        assert_eq!(result.status, 200);
        assert_eq!(devices.calls(), vec![r#"update lamp1 {"on":true}"#.to_string()]);
    }

    #[tokio::test]
    async fn test_batch_runs_in_order() {
        let devices = Arc::new(FakeDevices::with_lamp());
        let call = ToolCall::Batch {
            calls: vec![
                ToolCall::update("lamp1", json!({"on": true})),
                ToolCall::get("lamp1"),
                ToolCall::update("lamp1", json!({})),
                ToolCall::List,
            ],
        };

        let result = executor(&devices).execute(&call).await;

        assert_eq!(result.status, MULTI_STATUS);
        let members = result.data.as_array().unwrap();
        assert_eq!(members.len(), 4);
        assert_eq!(members[0]["status"], 200);
        assert_eq!(members[1]["status"], 200);
        assert_eq!(members[2], json!({"status": 400, "data": {"error": "missing state"}}));
        assert_eq!(members[3]["status"], 200);
        assert_eq!(
            devices.calls(),
            vec![
                r#"update lamp1 {"on":true}"#.to_string(),
                "get lamp1".to_string(),
                "list".to_string(),
            ]
        );
    }

    #[tokio::test]
    async fn test_nested_batch() {
        let devices = Arc::new(FakeDevices::with_lamp());
        let call = ToolCall::Batch {
            calls: vec![
                ToolCall::List,
                ToolCall::Batch {
                    calls: vec![ToolCall::get("lamp1")],
                },
            ],
        };

        let result = executor(&devices).execute(&call).await;

        assert_eq!(result.data[1]["status"], MULTI_STATUS);
        assert_eq!(result.data[1]["data"][0]["status"], 200);
    }

    #[tokio::test]
    async fn test_unsupported_action() {
        let devices = Arc::new(FakeDevices::with_lamp());
        let result = executor(&devices)
            .execute(&ToolCall::Unsupported {
                action: Some("reboot".to_string()),
            })
            .await;

        assert_eq!(result, ToolResult::unsupported_action());
        assert_eq!(devices.call_count(), 0);
    }

    #[tokio::test]
    async fn test_transport_failure_becomes_result() {
        let devices =
            Arc::new(FakeDevices::with_lamp().failing(ClientError::Timeout("10s".to_string())));
        let result = executor(&devices).execute(&ToolCall::List).await;

        assert_eq!(result.status, 504);
        assert!(result.error_message().unwrap().contains("timed out"));
    }
}
