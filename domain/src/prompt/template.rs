//! Prompt templates for the relay flow

use crate::device::Device;
use crate::session::ToolExchange;

/// Templates for the system prompt and follow-up turns
pub struct PromptTemplate;

impl PromptTemplate {
    /// Default instructions for the smart-home model
    pub fn default_instructions() -> &'static str {
        r#"You are the smart home control assistant. You must help with any request to read or
change device state. You are allowed to toggle, turn on/off, lock/unlock, open/close, and
adjust device values such as temperature, blinds position, or humidity. Do not refuse
requests to control appliances or lights.

You can call the smart home tool by responding with a single JSON object (no extra text).
Use one of:
{"action":"list"}
{"action":"get","id":"device_id"}
{"action":"update","id":"device_id","state":{...}}

If you need to change state, respond ONLY with the JSON tool call. Do not ask for the
desired state if the user already specified it."#
    }

    /// System prompt: instructions, then the device inventory when one is known
    pub fn system(instructions: &str, devices: Option<&[Device]>) -> String {
        let instructions = instructions.trim();
        let Some(devices) = devices else {
            return instructions.to_string();
        };

        let mut lines = vec![
            instructions.to_string(),
            String::new(),
            "Available devices:".to_string(),
        ];
        lines.extend(devices.iter().map(Device::inventory_line));
        lines.push(String::new());
        lines.push("Respond ONLY with the JSON tool call when acting.".to_string());
        lines.join("\n")
    }

    /// Prompt for a round that follows a tool execution
    pub fn follow_up(prompt: &str, exchange: &ToolExchange) -> String {
        let result =
            serde_json::to_string(&exchange.result).unwrap_or_else(|_| "null".to_string());
        format!(
            r#"{}

Tool call:
{}
Tool result:
{}

Respond with a final confirmation or another JSON tool call."#,
            prompt, exchange.call, result
        )
    }
}
