//! Builds the system prompt sent with every model turn.
//!
//! The device inventory is fetched fresh each time so the model always sees
//! current state. If the inventory cannot be fetched the instructions are
//! sent on their own.

use crate::ports::device_api::DeviceApi;
use relay_domain::{Device, PromptTemplate};
use std::sync::Arc;
use tracing::debug;

pub struct SystemPromptBuilder<D: DeviceApi> {
    devices: Arc<D>,
    instructions: String,
}

impl<D: DeviceApi> SystemPromptBuilder<D> {
    pub fn new(devices: Arc<D>, instructions: impl Into<String>) -> Self {
        Self {
            devices,
            instructions: instructions.into(),
        }
    }

    pub async fn build(&self) -> String {
        let inventory = match self.devices.list_devices().await {
            Ok(reply) if reply.is_success() => Device::list_from_json(&reply.body),
            Ok(reply) => {
                debug!("Device listing returned {}; omitting inventory", reply.status);
                None
            }
            Err(e) => {
                debug!("Device listing failed: {}; omitting inventory", e);
                None
            }
        };
        PromptTemplate::system(&self.instructions, inventory.as_deref())
    }
}
