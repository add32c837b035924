//! Application-level configuration.
//!
//! Controls how the relay use cases behave, independent of where the values
//! came from (file, environment, CLI flags).

use relay_domain::DomainError;
use serde::{Deserialize, Serialize};

/// Default number of tool rounds per relay run.
pub const DEFAULT_MAX_TOOL_ROUNDS: usize = 2;

/// Application behavior configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BehaviorConfig {
    /// Upper bound on tool executions (and follow-up model turns) per run.
    pub max_tool_rounds: usize,
    /// Pull the model and retry once when the backend reports it missing.
    pub provision_missing_model: bool,
}

impl Default for BehaviorConfig {
    fn default() -> Self {
        Self {
            max_tool_rounds: DEFAULT_MAX_TOOL_ROUNDS,
            provision_missing_model: true,
        }
    }
}

impl BehaviorConfig {
    pub fn with_max_tool_rounds(mut self, rounds: usize) -> Self {
        self.max_tool_rounds = rounds;
        self
    }

    pub fn without_provisioning(mut self) -> Self {
        self.provision_missing_model = false;
        self
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        if self.max_tool_rounds == 0 {
            return Err(DomainError::InvalidRoundLimit);
        }
        Ok(())
    }
}
