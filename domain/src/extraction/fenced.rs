//! Fenced tool block:
//!
//! ````text
//! ```tool_call
//! {"name": "get_device", "arguments": {"id": "lamp1"}}
//! ```
//! ````

use super::payload::{call_from_payload, decode};
use super::scan::first_json_object;
use crate::tool::ToolCall;

/// Opening marker of the fence
pub const FENCE_OPEN: &str = "```tool_call";
/// Closing marker of the fence
pub const FENCE_CLOSE: &str = "```";

/// Parse the first ` ```tool_call ` fence in `text`.
pub fn parse(text: &str) -> Option<ToolCall> {
    let start = text.find(FENCE_OPEN)? + FENCE_OPEN.len();
    let rest = &text[start..];
    let end = rest.find(FENCE_CLOSE)?;
    let fragment = first_json_object(&rest[..end])?;
    call_from_payload(&decode(fragment)?)
}
