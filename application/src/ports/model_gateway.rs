//! Model gateway port
//!
//! Defines the interface for the text-generation backend.

use super::backend::ClientResult;
use async_trait::async_trait;
use relay_domain::ModelTurn;

/// Gateway to the generation backend
#[async_trait]
pub trait ModelGateway: Send + Sync {
    /// Name of the model requests are issued against
    fn model_name(&self) -> &str;

    /// Run one non-streaming generation for the given turn
    async fn generate(&self, turn: &ModelTurn) -> ClientResult;

    /// Ask the backend to download the configured model
    async fn pull_model(&self) -> ClientResult;
}
