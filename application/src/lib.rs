//! Application layer for home-relay
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::BehaviorConfig;
pub use ports::{
    backend::{BackendReply, ClientError, ClientResult},
    device_api::DeviceApi,
    model_gateway::ModelGateway,
    progress::{NoProgress, RelayProgress},
};
pub use use_cases::execute_tool::ToolExecutor;
pub use use_cases::relay_prompt::{RelayPromptUseCase, needs_provisioning};
pub use use_cases::run_tool_loop::{RunToolLoopInput, RunToolLoopUseCase, ToolLoopOutput};
pub use use_cases::system_prompt::SystemPromptBuilder;
