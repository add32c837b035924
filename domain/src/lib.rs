//! Domain layer for home-relay
//!
//! This crate contains the core types and the call-extraction logic.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! - **Tool call**: a structured device operation ([`ToolCall`]) recognized in
//!   free-form model output by the [`extraction`] grammars
//! - **Tool result**: the normalized `(status, data)` outcome of running a call
//! - **Model turn**: one generate request, optionally carrying the previous
//!   round's call and result

pub mod core;
pub mod device;
pub mod extraction;
pub mod prompt;
pub mod session;
pub mod tool;

// Re-export commonly used types
pub use crate::core::{error::DomainError, user_prompt::UserPrompt};
pub use device::Device;
pub use extraction::{call_from_payload, extract_tool_call, extract_with_grammar};
pub use prompt::PromptTemplate;
pub use session::{ModelTurn, ToolExchange};
pub use tool::{MULTI_STATUS, ToolCall, ToolResult};
