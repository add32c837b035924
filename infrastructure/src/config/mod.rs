//! Configuration file loading for home-relay
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `RELAY_*` environment variables, then legacy ones (`OLLAMA_URL`, ...)
//! 2. `--config <path>` specified file
//! 3. Project root: `./home-relay.toml` or `./.home-relay.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/home-relay/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    ConfigValidationError, FileAgentConfig, FileConfig, FileDevicesConfig, FileModelConfig,
    FileServerConfig,
};
pub use loader::{ConfigLoader, legacy_env_key};
