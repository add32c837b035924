//! Presentation layer for home-relay
//!
//! This crate contains CLI definitions, the HTTP surface, response shaping
//! and progress reporters.

pub mod cli;
pub mod output;
pub mod progress;
pub mod server;

// Re-export commonly used types
pub use cli::commands::{Cli, Command};
pub use output::response::relay_response;
pub use progress::reporter::ConsoleProgress;
pub use server::{RelayState, create_router, serve};
