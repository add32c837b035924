//! Device API port
//!
//! Defines how the application layer reaches the smart-home device service.

use super::backend::ClientResult;
use async_trait::async_trait;
use serde_json::{Map, Value};

/// Gateway to the device service
///
/// Every operation returns the backend's status and decoded body, whether or
/// not the status indicates success. Implementations live in the
/// infrastructure layer.
#[async_trait]
pub trait DeviceApi: Send + Sync {
    /// `GET /api/devices`
    async fn list_devices(&self) -> ClientResult;

    /// `GET /api/devices/{id}`
    async fn get_device(&self, id: &str) -> ClientResult;

    /// `PUT /api/devices/{id}` with body `{"state": state}`
    async fn update_device(&self, id: &str, state: &Map<String, Value>) -> ClientResult;
}
