//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and converted into application types where
//! appropriate.

use relay_application::BehaviorConfig;
use relay_domain::PromptTemplate;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

/// Configuration validation errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigValidationError {
    #[error("{0} cannot be 0")]
    InvalidTimeout(&'static str),

    #[error("model name cannot be empty")]
    EmptyModelName,

    #[error("{0} cannot be empty")]
    EmptyUrl(&'static str),

    #[error("max_tool_rounds must be at least 1")]
    InvalidRoundLimit,
}

/// Raw HTTP server configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileServerConfig {
    /// Address to bind
    pub host: String,
    /// Port to listen on
    pub port: u16,
    /// Directory served for non-API `GET` requests
    pub static_dir: String,
}

impl Default for FileServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8090,
            static_dir: "static".to_string(),
        }
    }
}

impl FileServerConfig {
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Raw device service configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileDevicesConfig {
    /// Base URL of the device service
    pub base_url: String,
    /// Timeout in seconds for device reads and writes
    pub timeout_seconds: u64,
}

impl Default for FileDevicesConfig {
    fn default() -> Self {
        Self {
            base_url: "http://vshome:8080".to_string(),
            timeout_seconds: 10,
        }
    }
}

impl FileDevicesConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }
}

/// Raw generation backend configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileModelConfig {
    /// Base URL of the generation backend
    pub base_url: String,
    /// Model to generate with (and to pull when missing)
    pub name: String,
    /// Timeout in seconds for one generation
    pub generate_timeout_seconds: u64,
    /// Timeout in seconds for a model pull
    pub pull_timeout_seconds: u64,
    /// Instructions placed at the top of every system prompt
    pub system_prompt: String,
}

impl Default for FileModelConfig {
    fn default() -> Self {
        Self {
            base_url: "http://ollama:11434".to_string(),
            name: "functiongemma:latest".to_string(),
            generate_timeout_seconds: 60,
            pull_timeout_seconds: 120,
            system_prompt: PromptTemplate::default_instructions().to_string(),
        }
    }
}

impl FileModelConfig {
    pub fn generate_timeout(&self) -> Duration {
        Duration::from_secs(self.generate_timeout_seconds)
    }

    pub fn pull_timeout(&self) -> Duration {
        Duration::from_secs(self.pull_timeout_seconds)
    }
}

/// Raw agent configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileAgentConfig {
    /// Maximum tool executions per prompt
    pub max_tool_rounds: usize,
    /// Pull the model and retry once when the backend reports it missing
    pub provision_missing_model: bool,
}

impl Default for FileAgentConfig {
    fn default() -> Self {
        let behavior = BehaviorConfig::default();
        Self {
            max_tool_rounds: behavior.max_tool_rounds,
            provision_missing_model: behavior.provision_missing_model,
        }
    }
}

/// Complete configuration file structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    pub server: FileServerConfig,
    pub devices: FileDevicesConfig,
    pub model: FileModelConfig,
    pub agent: FileAgentConfig,
}

impl FileConfig {
    /// Strip trailing slashes from base URLs
    pub fn normalized(mut self) -> Self {
        self.devices.base_url = trim_base_url(&self.devices.base_url);
        self.model.base_url = trim_base_url(&self.model.base_url);
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.devices.base_url.trim().is_empty() {
            return Err(ConfigValidationError::EmptyUrl("devices.base_url"));
        }
        if self.model.base_url.trim().is_empty() {
            return Err(ConfigValidationError::EmptyUrl("model.base_url"));
        }
        if self.model.name.trim().is_empty() {
            return Err(ConfigValidationError::EmptyModelName);
        }

        let timeouts = [
            ("devices.timeout_seconds", self.devices.timeout_seconds),
            ("model.generate_timeout_seconds", self.model.generate_timeout_seconds),
            ("model.pull_timeout_seconds", self.model.pull_timeout_seconds),
        ];
        if let Some(&(name, _)) = timeouts.iter().find(|(_, secs)| *secs == 0) {
            return Err(ConfigValidationError::InvalidTimeout(name));
        }

        if self.agent.max_tool_rounds == 0 {
            return Err(ConfigValidationError::InvalidRoundLimit);
        }

        Ok(())
    }

    /// Application behavior derived from the `[agent]` section
    pub fn behavior(&self) -> BehaviorConfig {
        let behavior = BehaviorConfig::default().with_max_tool_rounds(self.agent.max_tool_rounds);
        if self.agent.provision_missing_model {
            behavior
        } else {
            behavior.without_provisioning()
        }
    }
}

fn trim_base_url(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = FileConfig::default();
        assert_eq!(config.server.port, 8090);
        assert_eq!(config.server.bind_address(), "0.0.0.0:8090");
        assert_eq!(config.devices.base_url, "http://vshome:8080");
        assert_eq!(config.devices.timeout(), Duration::from_secs(10));
        assert_eq!(config.model.name, "functiongemma:latest");
        assert_eq!(config.model.generate_timeout(), Duration::from_secs(60));
        assert_eq!(config.model.pull_timeout(), Duration::from_secs(120));
        assert_eq!(config.agent.max_tool_rounds, 2);
        assert!(config.model.system_prompt.contains("smart home"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_deserialize_partial_config() {
        let toml_str = r#"
[devices]
base_url = "http://localhost:8080/"

[model]
name = "llama3.2"

[agent]
max_tool_rounds = 4
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        let config = config.normalized();
        assert_eq!(config.devices.base_url, "http://localhost:8080");
        assert_eq!(config.devices.timeout_seconds, 10);
        assert_eq!(config.model.name, "llama3.2");
        assert_eq!(config.model.base_url, "http://ollama:11434");
        assert_eq!(config.behavior().max_tool_rounds, 4);
        assert!(config.behavior().provision_missing_model);
    }

    #[test]
    fn test_validate_zero_timeout() {
        let mut config = FileConfig::default();
        config.model.pull_timeout_seconds = 0;
        assert_eq!(
            config.validate(),
            Err(ConfigValidationError::InvalidTimeout("model.pull_timeout_seconds"))
        );
    }

    #[test]
    fn test_validate_empty_model_name() {
        let mut config = FileConfig::default();
        config.model.name = "  ".to_string();
        assert_eq!(config.validate(), Err(ConfigValidationError::EmptyModelName));
    }

    #[test]
    fn test_validate_empty_url() {
        let mut config = FileConfig::default();
        config.devices.base_url = String::new();
        assert_eq!(
            config.validate(),
            Err(ConfigValidationError::EmptyUrl("devices.base_url"))
        );
    }

    #[test]
    fn test_validate_round_limit() {
        let mut config = FileConfig::default();
        config.agent.max_tool_rounds = 0;
        assert_eq!(config.validate(), Err(ConfigValidationError::InvalidRoundLimit));
    }

    #[test]
    fn test_provisioning_can_be_disabled() {
        let config: FileConfig = toml::from_str("[agent]\nprovision_missing_model = false").unwrap();
        assert!(!config.behavior().provision_missing_model);
    }
}
