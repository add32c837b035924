//! Device service client

use super::{build_client, read_reply, request_error};
use async_trait::async_trait;
use relay_application::{ClientError, ClientResult, DeviceApi};
use reqwest::{Method, Url};
use serde_json::{Map, Value, json};
use std::time::Duration;
use tracing::debug;

/// [`DeviceApi`] over HTTP
#[derive(Clone)]
pub struct HttpDeviceClient {
    client: reqwest::Client,
    base_url: Url,
    timeout: Duration,
}

impl HttpDeviceClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, ClientError> {
        let base_url = Url::parse(base_url)
            .map_err(|e| ClientError::Transport(format!("invalid device URL {}: {}", base_url, e)))?;
        Ok(Self {
            client: build_client()?,
            base_url,
            timeout,
        })
    }

    /// `{base}/api/devices[/{id}]`, with the id percent-encoded as one segment
    fn devices_url(&self, id: Option<&str>) -> Result<Url, ClientError> {
        let mut url = self.base_url.clone();
        {
            let mut segments = url.path_segments_mut().map_err(|_| {
                ClientError::Transport(format!("device URL {} cannot be a base", self.base_url))
            })?;
            segments.pop_if_empty().push("api").push("devices");
            if let Some(id) = id {
                segments.push(id);
            }
        }
        Ok(url)
    }

    async fn send(&self, method: Method, url: Url, body: Option<Value>) -> ClientResult {
        debug!("{} {}", method, url);
        let mut request = self.client.request(method, url).timeout(self.timeout);
        if let Some(body) = body {
            request = request.json(&body);
        }
        let response = request.send().await.map_err(request_error)?;
        read_reply(response).await
    }
}

#[async_trait]
impl DeviceApi for HttpDeviceClient {
    async fn list_devices(&self) -> ClientResult {
        let url = self.devices_url(None)?;
        self.send(Method::GET, url, None).await
    }

    async fn get_device(&self, id: &str) -> ClientResult {
        let url = self.devices_url(Some(id))?;
        self.send(Method::GET, url, None).await
    }

    async fn update_device(&self, id: &str, state: &Map<String, Value>) -> ClientResult {
        let url = self.devices_url(Some(id))?;
        self.send(Method::PUT, url, Some(json!({ "state": state })))
            .await
    }
}
