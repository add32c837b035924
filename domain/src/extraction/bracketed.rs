//! Bracketed call list: `[get_device(id='lamp1'), list_devices()]`.
//!
//! This is the native output shape of small function-calling models. The
//! whole (trimmed) text must be the list; prose around it disqualifies it.

use serde_json::{Map, Value};

use super::scan::{split_top_level, unquote};
use crate::tool::entities::id_from;
use crate::tool::{GET_DEVICE, LIST_DEVICES, ToolCall, UPDATE_DEVICE_STATE};

/// A parsed `name(key=value, ...)` expression
#[derive(Debug, Clone, PartialEq)]
pub struct CallExpr {
    pub name: String,
    pub args: Map<String, Value>,
}

/// Parse a bracketed call list.
///
/// Unrecognized call names are dropped. One recognized call is returned as
/// is, several are wrapped in a [`ToolCall::Batch`], none yields `None`.
pub fn parse(text: &str) -> Option<ToolCall> {
    let inner = text.trim().strip_prefix('[')?.strip_suffix(']')?;

    let calls = split_top_level(inner)
        .into_iter()
        .filter_map(parse_call_expr)
        .filter_map(to_tool_call)
        .collect();

    ToolCall::from_calls(calls)
}

/// Parse `name(args)`; `None` if the expression is not call-shaped.
pub fn parse_call_expr(expr: &str) -> Option<CallExpr> {
    let expr = expr.trim();
    let open = expr.find('(')?;
    let body = expr[open + 1..].strip_suffix(')')?;
    let name = expr[..open].trim();
    if name.is_empty()
        || !name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '.')
    {
        return None;
    }

    Some(CallExpr {
        name: name.to_string(),
        args: parse_args(body),
    })
}

/// Parse `key=value` pairs separated by top-level commas.
///
/// Pieces without `=` are ignored; a repeated key keeps its last value.
pub fn parse_args(body: &str) -> Map<String, Value> {
    let mut args = Map::new();
    for piece in split_top_level(body) {
        if let Some((key, value)) = piece.split_once('=') {
            let key = key.trim();
            if !key.is_empty() {
                args.insert(key.to_string(), parse_value(value.trim()));
            }
        }
    }
    args
}

/// Interpret an argument value.
///
/// Object-looking values are JSON-decoded (kept as a literal string when that
/// fails), quoted values are unquoted, anything else is a literal string.
pub fn parse_value(raw: &str) -> Value {
    if raw.starts_with('{')
        && let Ok(value) = serde_json::from_str::<Value>(raw)
    {
        return value;
    }
    match unquote(raw) {
        Some(inner) => Value::String(inner.to_string()),
        None => Value::String(raw.to_string()),
    }
}

fn to_tool_call(expr: CallExpr) -> Option<ToolCall> {
    match expr.name.as_str() {
        LIST_DEVICES => Some(ToolCall::List),
        GET_DEVICE => Some(ToolCall::Get {
            id: id_from(expr.args.get("id")),
        }),
        UPDATE_DEVICE_STATE => Some(ToolCall::Update {
            id: id_from(expr.args.get("id")),
            state: expr.args.get("state").cloned().unwrap_or(Value::Null),
        }),
        _ => None,
    }
}
