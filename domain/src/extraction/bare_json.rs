//! Bare JSON fallback: the first `{`..last `}` span anywhere in the text.

use super::payload::{call_from_payload, decode};
use super::scan::first_json_object;
use crate::tool::ToolCall;

pub fn parse(text: &str) -> Option<ToolCall> {
    call_from_payload(&decode(first_json_object(text)?)?)
}
