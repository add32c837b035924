//! A single model turn: the user prompt plus, after the first round, the
//! tool exchange the model should react to.

use crate::prompt::PromptTemplate;
use crate::tool::{ToolCall, ToolResult};

/// The tool call of the previous round together with its result.
#[derive(Debug, Clone, PartialEq)]
pub struct ToolExchange {
    pub call: ToolCall,
    pub result: ToolResult,
}

impl ToolExchange {
    pub fn new(call: ToolCall, result: ToolResult) -> Self {
        Self { call, result }
    }
}

/// Input of one generate request.
///
/// The user prompt is carried unchanged across rounds; only `prior` changes.
#[derive(Debug, Clone, PartialEq)]
pub struct ModelTurn {
    pub prompt: String,
    pub system: Option<String>,
    pub prior: Option<ToolExchange>,
}

impl ModelTurn {
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            system: None,
            prior: None,
        }
    }

    pub fn with_system(mut self, system: impl Into<String>) -> Self {
        self.system = Some(system.into());
        self
    }

    pub fn with_prior(mut self, prior: ToolExchange) -> Self {
        self.prior = Some(prior);
        self
    }

    /// The prompt text sent to the model
    pub fn render_prompt(&self) -> String {
        match &self.prior {
            Some(exchange) => PromptTemplate::follow_up(&self.prompt, exchange),
            None => self.prompt.clone(),
        }
    }
}
