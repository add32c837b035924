//! Ollama-compatible generation backend client

use super::{build_client, read_reply, request_error};
use async_trait::async_trait;
use relay_application::{ClientError, ClientResult, ModelGateway};
use relay_domain::ModelTurn;
use serde::Serialize;
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, info, warn};

#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
    model: &'a str,
    prompt: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    system: Option<&'a str>,
    stream: bool,
}

#[derive(Debug, Serialize)]
struct PullRequest<'a> {
    name: &'a str,
    stream: bool,
}

/// [`ModelGateway`] for an Ollama-style `/api/generate` + `/api/pull` backend
#[derive(Clone)]
pub struct OllamaModelClient {
    client: reqwest::Client,
    base_url: String,
    model: String,
    generate_timeout: Duration,
    pull_timeout: Duration,
}

impl OllamaModelClient {
    pub fn new(
        base_url: impl Into<String>,
        model: impl Into<String>,
    ) -> Result<Self, ClientError> {
        Ok(Self {
            client: build_client()?,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            model: model.into(),
            generate_timeout: Duration::from_secs(60),
            pull_timeout: Duration::from_secs(120),
        })
    }

    pub fn with_timeouts(mut self, generate: Duration, pull: Duration) -> Self {
        self.generate_timeout = generate;
        self.pull_timeout = pull;
        self
    }

    fn generate_request<'a>(&'a self, turn: &'a ModelTurn) -> GenerateRequest<'a> {
        GenerateRequest {
            model: &self.model,
            prompt: turn.render_prompt(),
            system: turn.system.as_deref(),
            stream: false,
        }
    }

    async fn post<T: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &T,
        timeout: Duration,
    ) -> ClientResult {
        let url = format!("{}{}", self.base_url, path);
        debug!("POST {}", url);
        let response = self
            .client
            .post(&url)
            .timeout(timeout)
            .json(body)
            .send()
            .await
            .map_err(request_error)?;
        read_reply(response).await
    }
}

#[async_trait]
impl ModelGateway for OllamaModelClient {
    fn model_name(&self) -> &str {
        &self.model
    }

    async fn generate(&self, turn: &ModelTurn) -> ClientResult {
        let request = self.generate_request(turn);
        let reply = self
            .post("/api/generate", &request, self.generate_timeout)
            .await?;

        if !reply.is_success() {
            warn!("Model error {}: {}", reply.status, reply.body);
        } else if reply.response_text().is_empty() {
            warn!("Empty response payload: {}", reply.body);
        } else {
            info!("Model response: {}", reply.response_text());
        }
        Ok(reply)
    }

    async fn pull_model(&self) -> ClientResult {
        info!("Pulling model: {}", self.model);
        let reply = self
            .post(
                "/api/pull",
                &PullRequest {
                    name: &self.model,
                    stream: false,
                },
                self.pull_timeout,
            )
            .await?;
        if reply.body.get("status").and_then(Value::as_str) == Some("success") {
            info!("Model {} pulled", self.model);
        }
        Ok(reply)
    }
}
