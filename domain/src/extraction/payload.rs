//! Payload-to-call mapping shared by the JSON-based grammars.

use serde_json::{Map, Value};

use crate::tool::entities::id_from;
use crate::tool::{GET_DEVICE, LIST_DEVICES, ToolCall, UPDATE_DEVICE_STATE};

/// Namespace name some models use to wrap a raw action descriptor.
pub const SMART_HOME: &str = "smart_home";

/// Decode a JSON fragment, yielding `None` on any syntax error.
pub fn decode(fragment: &str) -> Option<Value> {
    serde_json::from_str(fragment.trim()).ok()
}

/// Map a decoded JSON payload to a call.
///
/// | Payload | Call |
/// |---------|------|
/// | `{"name":"smart_home","arguments":{..}}` | arguments read as an action descriptor |
/// | `{"name":"list_devices"}` | `List` |
/// | `{"name":"get_device","arguments":{"id":..}}` | `Get` |
/// | `{"name":"update_device_state","arguments":{"id":..,"state":..}}` | `Update` |
/// | `{"action":..}` | the object itself as an action descriptor |
///
/// `parameters` is accepted in place of `arguments`, and arguments encoded as
/// a JSON string are decoded first. When a named call has no arguments, the
/// payload's own fields are used.
pub fn call_from_payload(payload: &Value) -> Option<ToolCall> {
    let obj = payload.as_object()?;

    match obj.get("name").and_then(Value::as_str) {
        Some(SMART_HOME) => {
            return arguments(obj).map(|args| ToolCall::from_descriptor(&args));
        }
        Some(LIST_DEVICES) => return Some(ToolCall::List),
        Some(GET_DEVICE) => {
            let args = arguments(obj).unwrap_or_else(|| payload.clone());
            return Some(ToolCall::Get {
                id: id_from(args.get("id")),
            });
        }
        Some(UPDATE_DEVICE_STATE) => {
            let args = arguments(obj).unwrap_or_else(|| payload.clone());
            return Some(ToolCall::Update {
                id: id_from(args.get("id")),
                state: args.get("state").cloned().unwrap_or(Value::Null),
            });
        }
        _ => {}
    }

    if obj.contains_key("action") {
        return Some(ToolCall::from_descriptor(payload));
    }
    None
}

fn arguments(obj: &Map<String, Value>) -> Option<Value> {
    let raw = obj.get("arguments").or_else(|| obj.get("parameters"))?;
    match raw {
        Value::String(encoded) => decode(encoded),
        other => Some(other.clone()),
    }
}
