//! Run Tool Loop use case.
//!
//! Drives the model/tool round trips for one user prompt:
//!
//! ```text
//! prompt ──▶ model ──▶ extract ──▶ (none) ──▶ final answer
//!                        │
//!                        ▼
//!                  execute tool ──▶ model(prompt + call + result) ──▶ extract ...
//! ```
//!
//! At most `max_tool_rounds` tool calls are executed. When the limit is
//! reached the last model reply is returned as the final answer, even if it
//! asked for yet another tool call.

use crate::config::BehaviorConfig;
use crate::ports::backend::{BackendReply, fold_reply};
use crate::ports::device_api::DeviceApi;
use crate::ports::model_gateway::ModelGateway;
use crate::ports::progress::{NoProgress, RelayProgress};
use crate::use_cases::execute_tool::ToolExecutor;
use crate::use_cases::system_prompt::SystemPromptBuilder;
use relay_domain::{ModelTurn, ToolCall, ToolExchange, ToolResult, UserPrompt, extract_tool_call};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Input for the [`RunToolLoopUseCase`].
#[derive(Debug, Clone)]
pub struct RunToolLoopInput {
    pub prompt: UserPrompt,
    pub max_tool_rounds: usize,
}

impl RunToolLoopInput {
    pub fn new(prompt: UserPrompt) -> Self {
        Self {
            prompt,
            max_tool_rounds: BehaviorConfig::default().max_tool_rounds,
        }
    }

    pub fn with_max_tool_rounds(mut self, rounds: usize) -> Self {
        self.max_tool_rounds = rounds;
        self
    }
}

/// Outcome of a relay run.
///
/// `reply` is the last model reply, successful or not. `tool_call` and
/// `tool_result` describe the last tool round, if any ran.
#[derive(Debug, Clone, PartialEq)]
pub struct ToolLoopOutput {
    pub reply: BackendReply,
    pub tool_call: Option<ToolCall>,
    pub tool_result: Option<ToolResult>,
    /// Number of tool calls executed
    pub rounds: usize,
}

impl ToolLoopOutput {
    /// Output for a run that stopped before any tool executed
    pub fn from_reply(reply: BackendReply) -> Self {
        Self {
            reply,
            tool_call: None,
            tool_result: None,
            rounds: 0,
        }
    }

    pub fn status(&self) -> u16 {
        self.reply.status
    }

    pub fn is_success(&self) -> bool {
        self.reply.is_success()
    }

    pub fn response_text(&self) -> &str {
        self.reply.response_text()
    }
}

/// Use case for relaying one prompt through the model and device backends.
pub struct RunToolLoopUseCase<D: DeviceApi, M: ModelGateway> {
    model: Arc<M>,
    executor: ToolExecutor<D>,
    prompts: SystemPromptBuilder<D>,
}

impl<D: DeviceApi, M: ModelGateway> RunToolLoopUseCase<D, M> {
    pub fn new(devices: Arc<D>, model: Arc<M>, instructions: impl Into<String>) -> Self {
        Self {
            model,
            executor: ToolExecutor::new(Arc::clone(&devices)),
            prompts: SystemPromptBuilder::new(devices, instructions),
        }
    }

    pub async fn execute(&self, input: &RunToolLoopInput) -> ToolLoopOutput {
        self.execute_with_progress(input, &NoProgress).await
    }

    pub async fn execute_with_progress(
        &self,
        input: &RunToolLoopInput,
        progress: &dyn RelayProgress,
    ) -> ToolLoopOutput {
        let prompt = input.prompt.content();
        info!("Relaying prompt: {}", prompt);

        let reply = self.generate(ModelTurn::new(prompt)).await;
        progress.on_model_reply(0, reply.status);
        if !reply.is_success() {
            warn!("Model call failed with status {}", reply.status);
            return ToolLoopOutput::from_reply(reply);
        }
        debug!("Model response: {}", reply.response_text());

        let Some(mut call) = extract_tool_call(reply.response_text()) else {
            return ToolLoopOutput::from_reply(reply);
        };

        let mut output = ToolLoopOutput::from_reply(reply);
        for round in 1..=input.max_tool_rounds {
            info!("Tool call (round {}): {}", round, call);
            progress.on_tool_call(round, &call);
            let result = self.executor.execute(&call).await;
            progress.on_tool_result(round, &result);
            debug!("Tool result: status {}", result.status);

            let exchange = ToolExchange::new(call.clone(), result.clone());
            let turn = ModelTurn::new(prompt).with_prior(exchange);
            let reply = self.generate(turn).await;
            progress.on_model_reply(round, reply.status);

            output.rounds = round;
            if !reply.is_success() {
                warn!("Follow-up model call failed with status {}", reply.status);
                output.reply = reply;
                output.tool_call = Some(call);
                output.tool_result = Some(result);
                return output;
            }
            debug!("Model response: {}", reply.response_text());

            let next = extract_tool_call(reply.response_text());
            output.reply = reply;
            output.tool_result = Some(result);
            match next {
                None => {
                    output.tool_call = Some(call);
                    return output;
                }
                Some(next) => call = next,
            }
        }

        warn!(
            "Tool round limit ({}) reached; returning last model reply as final",
            input.max_tool_rounds
        );
        output.tool_call = Some(call);
        output
    }

    async fn generate(&self, turn: ModelTurn) -> BackendReply {
        let system = self.prompts.build().await;
        fold_reply(self.model.generate(&turn.with_system(system)).await)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::use_cases::test_support::{FakeDevices, FakeModel, reply};
    use serde_json::json;

    fn use_case(
        devices: &Arc<FakeDevices>,
        model: &Arc<FakeModel>,
    ) -> RunToolLoopUseCase<FakeDevices, FakeModel> {
        RunToolLoopUseCase::new(Arc::clone(devices), Arc::clone(model), "Control the home.")
    }

    fn input(prompt: &str) -> RunToolLoopInput {
        RunToolLoopInput::new(UserPrompt::try_new(prompt).unwrap())
    }

    fn tool_calls(devices: &FakeDevices) -> Vec<String> {
        devices
            .calls()
            .into_iter()
            .filter(|c| c != "list")
            .collect()
    }

    #[tokio::test]
    async fn test_plain_answer_needs_no_tools() {
        let devices = Arc::new(FakeDevices::with_lamp());
        let model = Arc::new(FakeModel::new(vec![reply("Hello there.")]));

        let output = use_case(&devices, &model).execute(&input("hi")).await;

        assert_eq!(output.status(), 200);
        assert_eq!(output.response_text(), "Hello there.");
        assert_eq!(output.tool_call, None);
        assert_eq!(output.rounds, 0);
        assert!(tool_calls(&devices).is_empty());
    }

    #[tokio::test]
    async fn test_single_round() {
        let devices = Arc::new(FakeDevices::with_lamp());
        let model = Arc::new(FakeModel::new(vec![
            reply(r#"{"action":"update","id":"lamp1","state":{"on":true}}"#),
            reply("The lamp is on."),
        ]));

        let output = use_case(&devices, &model)
            .execute(&input("turn on the lamp"))
            .await;

        assert_eq!(output.status(), 200);
        assert_eq!(output.response_text(), "The lamp is on.");
        assert_eq!(
            output.tool_call,
            Some(ToolCall::update("lamp1", json!({"on": true})))
        );
        assert_eq!(output.tool_result.as_ref().map(|r| r.status), Some(200));
        assert_eq!(tool_calls(&devices), vec![r#"update lamp1 {"on":true}"#]);
    }

    #[tokio::test]
    async fn test_prompt_is_resent_unchanged() {
        let devices = Arc::new(FakeDevices::with_lamp());
        let model = Arc::new(FakeModel::new(vec![
            reply(r#"{"action":"get","id":"lamp1"}"#),
            reply(r#"{"action":"update","id":"lamp1","state":{"on":true}}"#),
            reply("Done."),
        ]));

        use_case(&devices, &model)
            .execute(&input("turn on the lamp"))
            .await;

        let turns = model.turns();
        assert_eq!(turns.len(), 3);
        assert!(turns.iter().all(|t| t.prompt == "turn on the lamp"));
        assert!(turns[0].prior.is_none());
        assert_eq!(turns[1].prior.as_ref().unwrap().call, ToolCall::get("lamp1"));
        assert_eq!(
            turns[2].prior.as_ref().unwrap().call,
            ToolCall::update("lamp1", json!({"on": true}))
        );
        assert!(
            turns
                .iter()
                .all(|t| t.system.as_deref().unwrap().contains("Available devices:"))
        );
    }

    #[tokio::test]
    async fn test_initial_model_failure_returns_immediately() {
        let devices = Arc::new(FakeDevices::with_lamp());
        let model = Arc::new(FakeModel::new(vec![Ok(BackendReply::new(
            500,
            json!({"error": "boom"}),
        ))]));

        let output = use_case(&devices, &model).execute(&input("hi")).await;

        assert_eq!(output.status(), 500);
        assert_eq!(output.reply.body, json!({"error": "boom"}));
        assert_eq!(model.turns().len(), 1);
        assert!(tool_calls(&devices).is_empty());
    }

    #[tokio::test]
    async fn test_follow_up_failure_keeps_last_round() {
        let devices = Arc::new(FakeDevices::with_lamp());
        let model = Arc::new(FakeModel::new(vec![
            reply(r#"{"action":"list"}"#),
            Ok(BackendReply::new(503, json!({"error": "overloaded"}))),
        ]));

        let output = use_case(&devices, &model).execute(&input("what's on?")).await;

        assert_eq!(output.status(), 503);
        assert_eq!(output.tool_call, Some(ToolCall::List));
        assert_eq!(output.tool_result.as_ref().map(|r| r.status), Some(200));
        assert_eq!(output.rounds, 1);
    }

    #[tokio::test]
    async fn test_round_limit_returns_unresolved_reply() {
        let devices = Arc::new(FakeDevices::with_lamp());
        let model = Arc::new(FakeModel::new(vec![
            reply(r#"{"action":"get","id":"lamp1"}"#),
            reply(r#"{"action":"get","id":"lamp1"}"#),
            reply(r#"{"action":"list"}"#),
            reply("never requested"),
        ]));

        let output = use_case(&devices, &model).execute(&input("check lamp")).await;

        assert_eq!(output.rounds, 2);
        assert_eq!(model.turns().len(), 3);
        assert_eq!(output.response_text(), r#"{"action":"list"}"#);
        assert_eq!(output.tool_call, Some(ToolCall::List));
        assert_eq!(tool_calls(&devices), vec!["get lamp1", "get lamp1"]);
    }

    #[tokio::test]
    async fn test_custom_round_limit() {
        let devices = Arc::new(FakeDevices::with_lamp());
        let model = Arc::new(FakeModel::new(vec![
            reply(r#"{"action":"list"}"#),
            reply(r#"{"action":"list"}"#),
        ]));

        let output = use_case(&devices, &model)
            .execute(&input("list").with_max_tool_rounds(1))
            .await;

        assert_eq!(output.rounds, 1);
        assert_eq!(model.turns().len(), 2);
    }

    #[tokio::test]
    async fn test_same_prompt_same_outcome() {
        let script = || {
            vec![
                reply(r#"[update_device_state(id="lamp1", state={"on": true})]"#),
                reply("Lamp on."),
            ]
        };
        let devices = Arc::new(FakeDevices::with_lamp());
        let first = use_case(&devices, &Arc::new(FakeModel::new(script())))
            .execute(&input("lamp on"))
            .await;
        let second = use_case(&devices, &Arc::new(FakeModel::new(script())))
            .execute(&input("lamp on"))
            .await;

        assert_eq!(first.status(), second.status());
        assert_eq!(first.response_text(), second.response_text());
        assert_eq!(first, second);
    }
}
