//! User prompt value object

use super::error::DomainError;
use serde::{Deserialize, Serialize};

/// A non-blank request from the user (Value Object)
///
/// Stored verbatim. The same prompt is re-sent unchanged on every round of a
/// relay run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct UserPrompt {
    content: String,
}

impl UserPrompt {
    /// Create a prompt, rejecting empty or whitespace-only content
    pub fn try_new(content: impl Into<String>) -> Result<Self, DomainError> {
        let content = content.into();
        if content.trim().is_empty() {
            return Err(DomainError::EmptyPrompt);
        }
        Ok(Self { content })
    }

    pub fn content(&self) -> &str {
        &self.content
    }
}

impl std::fmt::Display for UserPrompt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.content)
    }
}

impl TryFrom<String> for UserPrompt {
    type Error = DomainError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        UserPrompt::try_new(s)
    }
}

impl TryFrom<&str> for UserPrompt {
    type Error = DomainError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        UserPrompt::try_new(s)
    }
}

impl From<UserPrompt> for String {
    fn from(prompt: UserPrompt) -> Self {
        prompt.content
    }
}
