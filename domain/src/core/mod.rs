//! Core domain concepts shared across all subdomains.
//!
//! - [`user_prompt::UserPrompt`]: a validated user request
//! - [`error::DomainError`]: domain-level errors

pub mod error;
pub mod user_prompt;
