//! Tool domain entities

use serde::{Serialize, Serializer};
use serde_json::{Map, Value, json};

/// Operation name for listing every device.
pub const LIST_DEVICES: &str = "list_devices";
/// Operation name for reading a single device.
pub const GET_DEVICE: &str = "get_device";
/// Operation name for writing device state.
pub const UPDATE_DEVICE_STATE: &str = "update_device_state";

/// A structured device operation derived from model output.
///
/// Created by the call extractor, consumed once by the tool executor.
/// `Get`/`Update` may carry an empty `id` or a non-object `state` when the
/// model produced one; the executor reports those as validation failures
/// instead of this type rejecting them up front.
#[derive(Debug, Clone, PartialEq)]
pub enum ToolCall {
    /// List every device
    List,
    /// Read one device
    Get { id: String },
    /// Merge `state` into one device
    Update { id: String, state: Value },
    /// Several calls executed in order
    Batch { calls: Vec<ToolCall> },
    /// A call descriptor whose action is not one of ours
    Unsupported { action: Option<String> },
}

impl ToolCall {
    pub fn get(id: impl Into<String>) -> Self {
        ToolCall::Get { id: id.into() }
    }

    pub fn update(id: impl Into<String>, state: Value) -> Self {
        ToolCall::Update {
            id: id.into(),
            state,
        }
    }

    /// Wrap calls as a batch, unwrapping the single-call case.
    ///
    /// Returns `None` for an empty list.
    pub fn from_calls(mut calls: Vec<ToolCall>) -> Option<Self> {
        match calls.len() {
            0 => None,
            1 => calls.pop(),
            _ => Some(ToolCall::Batch { calls }),
        }
    }

    /// Short action label used in descriptors and logs.
    pub fn action(&self) -> &str {
        match self {
            ToolCall::List => "list",
            ToolCall::Get { .. } => "get",
            ToolCall::Update { .. } => "update",
            ToolCall::Batch { .. } => "batch",
            ToolCall::Unsupported { action } => action.as_deref().unwrap_or("unknown"),
        }
    }

    pub fn is_batch(&self) -> bool {
        matches!(self, ToolCall::Batch { .. })
    }

    /// Interpret an action descriptor such as `{"action":"get","id":"lamp1"}`.
    ///
    /// The operation names (`list_devices`, `get_device`,
    /// `update_device_state`) are accepted as actions too. Anything else,
    /// including a non-object value, becomes [`ToolCall::Unsupported`].
    pub fn from_descriptor(value: &Value) -> Self {
        let Some(obj) = value.as_object() else {
            return ToolCall::Unsupported { action: None };
        };
        let action = obj.get("action").and_then(Value::as_str);
        match action {
            Some("list") | Some(LIST_DEVICES) => ToolCall::List,
            Some("get") | Some(GET_DEVICE) => ToolCall::Get {
                id: id_field(obj),
            },
            Some("update") | Some(UPDATE_DEVICE_STATE) => ToolCall::Update {
                id: id_field(obj),
                state: obj.get("state").cloned().unwrap_or(Value::Null),
            },
            Some("batch") => {
                let calls = obj
                    .get("calls")
                    .and_then(Value::as_array)
                    .map(|items| items.iter().map(ToolCall::from_descriptor).collect())
                    .unwrap_or_default();
                ToolCall::Batch { calls }
            }
            other => ToolCall::Unsupported {
                action: other.map(str::to_string),
            },
        }
    }

    /// Render back into the action-descriptor form.
    pub fn to_descriptor(&self) -> Value {
        match self {
            ToolCall::List => json!({ "action": self.action() }),
            ToolCall::Get { id } => json!({ "action": self.action(), "id": id }),
            ToolCall::Update { id, state } => {
                json!({ "action": self.action(), "id": id, "state": state })
            }
            ToolCall::Batch { calls } => json!({
                "action": self.action(),
                "calls": calls.iter().map(ToolCall::to_descriptor).collect::<Vec<_>>(),
            }),
            ToolCall::Unsupported { action } => json!({ "action": action }),
        }
    }
}

impl std::fmt::Display for ToolCall {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_descriptor())
    }
}

impl Serialize for ToolCall {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_descriptor().serialize(serializer)
    }
}

/// Read a device id; numbers are stringified, anything else is empty.
pub fn id_from(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        _ => String::new(),
    }
}

fn id_field(obj: &Map<String, Value>) -> String {
    id_from(obj.get("id"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_calls_unwraps_single() {
        assert_eq!(ToolCall::from_calls(vec![ToolCall::List]), Some(ToolCall::List));
        assert_eq!(ToolCall::from_calls(vec![]), None);

        let batch = ToolCall::from_calls(vec![ToolCall::get("a"), ToolCall::List]).unwrap();
        assert!(batch.is_batch());
    }

    #[test]
    fn test_descriptor_accepts_short_and_long_actions() {
        assert_eq!(
            ToolCall::from_descriptor(&json!({"action": "list"})),
            ToolCall::List
        );
        assert_eq!(
            ToolCall::from_descriptor(&json!({"action": "get_device", "id": "lamp1"})),
            ToolCall::get("lamp1")
        );
        assert_eq!(
            ToolCall::from_descriptor(&json!({"action": "update", "id": 7, "state": {"on": true}})),
            ToolCall::update("7", json!({"on": true}))
        );
    }

    #[test]
    fn test_descriptor_unknown_action() {
        assert_eq!(
            ToolCall::from_descriptor(&json!({"action": "reboot"})),
            ToolCall::Unsupported {
                action: Some("reboot".to_string())
            }
        );
        assert_eq!(
            ToolCall::from_descriptor(&json!("list")),
            ToolCall::Unsupported { action: None }
        );
    }

    #[test]
    fn test_action_labels() {
        assert_eq!(ToolCall::get("a").action(), "get");
        assert_eq!(ToolCall::get("a").to_descriptor()["action"], "get");
        assert_eq!(ToolCall::Unsupported { action: None }.action(), "unknown");
        assert_eq!(
            ToolCall::Unsupported {
                action: Some("reboot".to_string())
            }
            .action(),
            "reboot"
        );
    }

    #[test]
    fn test_update_without_state_keeps_null() {
        let call = ToolCall::from_descriptor(&json!({"action": "update", "id": "x"}));
        assert_eq!(call, ToolCall::update("x", Value::Null));
    }

    #[test]
    fn test_batch_descriptor_round_trip() {
        let call = ToolCall::Batch {
            calls: vec![ToolCall::get("a"), ToolCall::List],
        };
        let descriptor = call.to_descriptor();
        assert_eq!(descriptor["action"], "batch");
        assert_eq!(descriptor["calls"][0], json!({"action": "get", "id": "a"}));
        assert_eq!(ToolCall::from_descriptor(&descriptor), call);
    }

    #[test]
    fn test_serializes_as_descriptor() {
        let text = serde_json::to_string(&ToolCall::get("lamp1")).unwrap();
        assert_eq!(text, r#"{"action":"get","id":"lamp1"}"#);
    }
}
