//! Tagged block: `<start_function_call>{...}<end_function_call>`.

use super::payload::{call_from_payload, decode};
use crate::tool::ToolCall;

pub const START_TAG: &str = "<start_function_call>";
pub const END_TAG: &str = "<end_function_call>";

/// Decode the content between the first start tag and the following end tag.
pub fn parse(text: &str) -> Option<ToolCall> {
    let start = text.find(START_TAG)? + START_TAG.len();
    let rest = &text[start..];
    let end = rest.find(END_TAG)?;
    call_from_payload(&decode(&rest[..end])?)
}
