//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, PartialEq, Eq)]
pub enum DomainError {
    #[error("missing prompt")]
    EmptyPrompt,

    #[error("max_tool_rounds must be at least 1")]
    InvalidRoundLimit,
}
