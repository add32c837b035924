//! Model session domain.
//!
//! - [`turn::ModelTurn`]: one generate request (prompt + optional prior tool exchange)
//! - [`turn::ToolExchange`]: the call/result pair fed back to the model

pub mod turn;

pub use turn::{ModelTurn, ToolExchange};
