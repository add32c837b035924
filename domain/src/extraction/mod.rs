//! Tool call extraction from free-form model output.
//!
//! Small local models are inconsistent about how they express a function
//! call. The extractor tries a fixed list of independent grammars in
//! priority order and returns the first call any of them recognizes:
//!
//! | # | Grammar | Example |
//! |---|---------|---------|
//! | 1 | [`bracketed`] | `[get_device(id='lamp1'), list_devices()]` |
//! | 2 | [`fenced`] | ` ```tool_call {"name": ..} ``` ` |
//! | 3 | [`keyword`] | `update_device_state {"id": .., "state": ..}` |
//! | 4 | [`tagged`] | `<start_function_call>{..}<end_function_call>` |
//! | 5 | [`bare_json`] | `{"action": "list"}` anywhere in the text |
//!
//! Every grammar is a pure `fn(&str) -> Option<ToolCall>`. Malformed
//! fragments never surface as errors; the grammar yields `None` and the next
//! one is tried. If all of them fail, the text is a plain answer.
//!
//! The order matters: the bracketed grammar runs before the keyword grammar
//! even though a bracket list also contains the keywords.

pub mod bare_json;
pub mod bracketed;
pub mod fenced;
pub mod keyword;
pub mod payload;
pub mod scan;
pub mod tagged;

use crate::tool::ToolCall;

pub use payload::call_from_payload;

/// A single parsing strategy
pub type Grammar = fn(&str) -> Option<ToolCall>;

/// All grammars, highest priority first
pub const GRAMMARS: [(&str, Grammar); 5] = [
    ("bracketed", bracketed::parse),
    ("fenced", fenced::parse),
    ("keyword", keyword::parse),
    ("tagged", tagged::parse),
    ("bare_json", bare_json::parse),
];

/// Extract at most one call (possibly a batch) from model output.
pub fn extract_tool_call(text: &str) -> Option<ToolCall> {
    extract_with_grammar(text).map(|(_, call)| call)
}

/// Like [`extract_tool_call`], also naming the grammar that matched.
pub fn extract_with_grammar(text: &str) -> Option<(&'static str, ToolCall)> {
    if text.trim().is_empty() {
        return None;
    }
    GRAMMARS
        .iter()
        .find_map(|(name, grammar)| grammar(text).map(|call| (*name, call)))
}
