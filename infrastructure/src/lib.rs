//! Infrastructure layer for home-relay
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod http;

// Re-export commonly used types
pub use config::{
    ConfigLoader, ConfigValidationError, FileAgentConfig, FileConfig, FileDevicesConfig,
    FileModelConfig, FileServerConfig,
};
pub use http::{HttpDeviceClient, OllamaModelClient};
