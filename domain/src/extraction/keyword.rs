//! Inline keyword heuristic.
//!
//! Models sometimes mention the operation by name and put the arguments in a
//! loose JSON object nearby, e.g. `Calling get_device with {"id": "lamp1"}`.
//! Keywords are matched case-insensitively; the first keyword found (in the
//! priority order below) decides the outcome.

use serde_json::Value;

use super::payload::{call_from_payload, decode};
use super::scan::first_json_object;
use crate::tool::{GET_DEVICE, LIST_DEVICES, ToolCall, UPDATE_DEVICE_STATE};

/// Keywords in priority order, with the operation each one injects.
/// `None` means the keyword needs no arguments.
pub const KEYWORDS: [(&str, Option<&str>); 4] = [
    (UPDATE_DEVICE_STATE, Some(UPDATE_DEVICE_STATE)),
    (GET_DEVICE, Some(GET_DEVICE)),
    (LIST_DEVICES, None),
    ("smart_home.update", Some(UPDATE_DEVICE_STATE)),
];

pub fn parse(text: &str) -> Option<ToolCall> {
    let lowered = text.to_lowercase();
    let (_, operation) = KEYWORDS
        .iter()
        .find(|(keyword, _)| lowered.contains(keyword))?;

    let Some(operation) = operation else {
        return Some(ToolCall::List);
    };

    let mut payload = decode(first_json_object(text)?)?;
    let obj = payload.as_object_mut()?;
    obj.insert("name".to_string(), Value::String(operation.to_string()));
    call_from_payload(&payload)
}
