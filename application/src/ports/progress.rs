//! Progress notification port
//!
//! Defines the interface for reporting what happens during a relay run.

use relay_domain::{ToolCall, ToolResult};

/// Callback for progress updates during a relay run
///
/// Implementations live in the presentation layer. `round` is 0 for the
/// initial model turn and counts tool rounds from 1.
pub trait RelayProgress: Send + Sync {
    /// Called after each model turn returns
    fn on_model_reply(&self, _round: usize, _status: u16) {}

    /// Called before a tool call is executed
    fn on_tool_call(&self, _round: usize, _call: &ToolCall) {}

    /// Called once a tool call has produced its result
    fn on_tool_result(&self, _round: usize, _result: &ToolResult) {}

    /// Called when the configured model is being pulled
    fn on_provisioning(&self, _model: &str) {}
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoProgress;

impl RelayProgress for NoProgress {}
