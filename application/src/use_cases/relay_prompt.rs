//! Relay Prompt use case.
//!
//! Wraps [`RunToolLoopUseCase`] with the model provisioning policy: when the
//! very first model call reports that the model does not exist, the model is
//! pulled once and the whole run is repeated once.

use crate::config::BehaviorConfig;
use crate::ports::backend::fold_reply;
use crate::ports::device_api::DeviceApi;
use crate::ports::model_gateway::ModelGateway;
use crate::ports::progress::{NoProgress, RelayProgress};
use crate::use_cases::run_tool_loop::{RunToolLoopInput, RunToolLoopUseCase, ToolLoopOutput};
use relay_domain::UserPrompt;
use std::sync::Arc;
use tracing::{info, warn};

/// Whether a failed run should trigger a model pull.
///
/// Only failures of the initial model call qualify, and only when the error
/// text mentions both "model" and "not found".
pub fn needs_provisioning(output: &ToolLoopOutput) -> bool {
    if output.is_success() || output.rounds > 0 {
        return false;
    }
    output.reply.error_message().is_some_and(|message| {
        let message = message.to_lowercase();
        message.contains("not found") && message.contains("model")
    })
}

/// Use case for serving one relay request end to end.
pub struct RelayPromptUseCase<D: DeviceApi, M: ModelGateway> {
    model: Arc<M>,
    tool_loop: RunToolLoopUseCase<D, M>,
    behavior: BehaviorConfig,
}

impl<D: DeviceApi, M: ModelGateway> RelayPromptUseCase<D, M> {
    pub fn new(devices: Arc<D>, model: Arc<M>, instructions: impl Into<String>) -> Self {
        Self {
            tool_loop: RunToolLoopUseCase::new(devices, Arc::clone(&model), instructions),
            model,
            behavior: BehaviorConfig::default(),
        }
    }

    pub fn with_behavior(mut self, behavior: BehaviorConfig) -> Self {
        self.behavior = behavior;
        self
    }

    /// Relay a prompt with the configured round limit.
    pub async fn execute(&self, prompt: UserPrompt) -> ToolLoopOutput {
        let input =
            RunToolLoopInput::new(prompt).with_max_tool_rounds(self.behavior.max_tool_rounds);
        self.execute_with_progress(&input, &NoProgress).await
    }

    pub async fn execute_with_progress(
        &self,
        input: &RunToolLoopInput,
        progress: &dyn RelayProgress,
    ) -> ToolLoopOutput {
        let output = self.tool_loop.execute_with_progress(input, progress).await;
        if !self.behavior.provision_missing_model || !needs_provisioning(&output) {
            return output;
        }

        let model = self.model.model_name();
        info!("Model {} is missing; pulling it", model);
        progress.on_provisioning(model);
        let pull = fold_reply(self.model.pull_model().await);
        if !pull.is_success() {
            warn!("Pulling model {} failed with status {}", model, pull.status);
            return ToolLoopOutput::from_reply(pull);
        }

        info!("Model {} pulled; retrying prompt", model);
        self.tool_loop.execute_with_progress(input, progress).await
    }
}
