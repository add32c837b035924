//! Hand-written doubles for the use case tests.

use crate::ports::backend::{BackendReply, ClientError, ClientResult};
use crate::ports::device_api::DeviceApi;
use crate::ports::model_gateway::ModelGateway;
use async_trait::async_trait;
use relay_domain::ModelTurn;
use serde_json::{Map, Value, json};
use std::collections::VecDeque;
use std::sync::Mutex;

// ==================== Devices ====================

pub struct FakeDevices {
    devices: Vec<Value>,
    calls: Mutex<Vec<String>>,
    failure: Option<ClientError>,
}

impl FakeDevices {
    pub fn with_lamp() -> Self {
        Self {
            devices: vec![json!({
                "id": "lamp1",
                "name": "Desk Lamp",
                "kind": "toggle",
                "room": "Office",
                "state": {"on": false}
            })],
            calls: Mutex::new(Vec::new()),
            failure: None,
        }
    }

    pub fn failing(mut self, error: ClientError) -> Self {
        self.failure = Some(error);
        self
    }

    /// Every request received, in order
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    fn record(&self, call: String) -> Result<(), ClientError> {
        self.calls.lock().unwrap().push(call);
        match &self.failure {
            Some(e) => Err(e.clone()),
            None => Ok(()),
        }
    }

    fn find(&self, id: &str) -> Option<&Value> {
        self.devices.iter().find(|d| d["id"] == id)
    }
}

#[async_trait]
impl DeviceApi for FakeDevices {
    async fn list_devices(&self) -> ClientResult {
        self.record("list".to_string())?;
        Ok(BackendReply::new(200, Value::Array(self.devices.clone())))
    }

    async fn get_device(&self, id: &str) -> ClientResult {
        self.record(format!("get {}", id))?;
        Ok(match self.find(id) {
            Some(device) => BackendReply::new(200, device.clone()),
            None => BackendReply::new(404, json!({"error": "device not found"})),
        })
    }

    async fn update_device(&self, id: &str, state: &Map<String, Value>) -> ClientResult {
        let patch = Value::Object(state.clone());
        self.record(format!("update {} {}", id, patch))?;
        Ok(match self.find(id) {
            Some(device) => {
                let mut device = device.clone();
                if let Some(current) = device["state"].as_object_mut() {
                    current.extend(state.clone());
                }
                BackendReply::new(200, device)
            }
            None => BackendReply::new(404, json!({"error": "device not found"})),
        })
    }
}

// ==================== Model ====================

pub fn reply(text: &str) -> ClientResult {
    Ok(BackendReply::new(200, json!({"response": text, "done": true})))
}

pub fn model_missing() -> ClientResult {
    Ok(BackendReply::new(
        404,
        json!({"error": "model 'functiongemma:latest' not found"}),
    ))
}

pub struct FakeModel {
    replies: Mutex<VecDeque<ClientResult>>,
    pull_reply: Mutex<Option<ClientResult>>,
    turns: Mutex<Vec<ModelTurn>>,
    pulls: Mutex<usize>,
}

impl FakeModel {
    pub fn new(replies: Vec<ClientResult>) -> Self {
        Self {
            replies: Mutex::new(VecDeque::from(replies)),
            pull_reply: Mutex::new(None),
            turns: Mutex::new(Vec::new()),
            pulls: Mutex::new(0),
        }
    }

    pub fn with_pull_reply(self, reply: ClientResult) -> Self {
        *self.pull_reply.lock().unwrap() = Some(reply);
        self
    }

    pub fn turns(&self) -> Vec<ModelTurn> {
        self.turns.lock().unwrap().clone()
    }

    pub fn pull_count(&self) -> usize {
        *self.pulls.lock().unwrap()
    }
}

#[async_trait]
impl ModelGateway for FakeModel {
    fn model_name(&self) -> &str {
        "functiongemma:latest"
    }

    async fn generate(&self, turn: &ModelTurn) -> ClientResult {
        self.turns.lock().unwrap().push(turn.clone());
        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(ClientError::Transport("no more replies".to_string())))
    }

    async fn pull_model(&self) -> ClientResult {
        *self.pulls.lock().unwrap() += 1;
        self.pull_reply
            .lock()
            .unwrap()
            .take()
            .unwrap_or_else(|| Ok(BackendReply::new(200, json!({"status": "success"}))))
    }
}
