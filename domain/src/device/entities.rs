//! Device entity as reported by the device API

use serde::Serialize;
use serde_json::{Map, Value};

use crate::tool::entities::id_from;

/// A controllable device (read-only to the relay)
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Device {
    pub id: Option<String>,
    pub name: Option<String>,
    pub kind: Option<String>,
    pub room: Option<String>,
    pub state: Map<String, Value>,
}

impl Device {
    /// Read a device object field by field.
    ///
    /// Unusable fields fall back to "absent" rather than rejecting the
    /// device; a null or non-object `state` becomes empty.
    pub fn from_json(value: &Value) -> Option<Device> {
        let obj = value.as_object()?;
        let id = Some(id_from(obj.get("id"))).filter(|id| !id.is_empty());
        Some(Device {
            id,
            name: text_field(obj.get("name")),
            kind: text_field(obj.get("kind")),
            room: text_field(obj.get("room")),
            state: obj
                .get("state")
                .and_then(Value::as_object)
                .cloned()
                .unwrap_or_default(),
        })
    }

    /// Parse a device listing, skipping entries that are not objects.
    ///
    /// Returns `None` if `value` is not a JSON array.
    pub fn list_from_json(value: &Value) -> Option<Vec<Device>> {
        let items = value.as_array()?;
        Some(items.iter().filter_map(Device::from_json).collect())
    }

    /// One inventory line for the system prompt:
    /// `- {name} (id: {id}, kind: {kind}, room: {room}, state: {state})`
    pub fn inventory_line(&self) -> String {
        let room = match self.room.as_deref() {
            Some(room) if !room.is_empty() => room,
            _ => "Unassigned",
        };
        let state = serde_json::to_string(&self.state).unwrap_or_else(|_| "{}".to_string());
        format!(
            "- {} (id: {}, kind: {}, room: {}, state: {})",
            self.name.as_deref().unwrap_or("unknown"),
            self.id.as_deref().unwrap_or("unknown"),
            self.kind.as_deref().unwrap_or("unknown"),
            room,
            state
        )
    }
}

fn text_field(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}
