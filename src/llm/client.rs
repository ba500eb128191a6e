use super::types::*;
use crate::{Error, Result, config::UpstreamConfig};
use async_trait::async_trait;
use reqwest::{StatusCode, header};
use tracing::debug;

#[async_trait]
pub trait LlmClient: Send + Sync {
    async fn create_chat_completion(
        &self,
        request: ChatCompletionRequest,
    ) -> Result<ChatCompletionResponse>;
}

/// Chat-completion client for OpenRouter (or any endpoint speaking the same
/// JSON). Each call is a single POST: no retries and no timeout beyond the
/// HTTP client's own defaults.
pub struct OpenRouterClient {
    http: reqwest::Client,
    endpoint: String,
    api_key: String,
}

impl OpenRouterClient {
    pub fn new(config: &UpstreamConfig) -> Self {
        Self::with_http_client(reqwest::Client::new(), config)
    }

    pub fn with_http_client(http: reqwest::Client, config: &UpstreamConfig) -> Self {
        Self {
            http,
            endpoint: config.endpoint(),
            api_key: config.api_key.clone(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl LlmClient for OpenRouterClient {
    async fn create_chat_completion(
        &self,
        request: ChatCompletionRequest,
    ) -> Result<ChatCompletionResponse> {
        debug!(
            "Creating chat completion with {} messages for model {}",
            request.messages.len(),
            request.model
        );

        let response = self
            .http
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .header(header::CONTENT_TYPE, "application/json")
            .body(serde_json::to_vec(&request)?)
            .send()
            .await?;

        let status = response.status();
        if status != StatusCode::OK {
            let body = response.text().await?;
            debug!("Upstream answered {} ({} bytes)", status, body.len());
            return Err(Error::Upstream {
                status: status.as_u16(),
                body,
            });
        }

        let response: ChatCompletionResponse = response.json().await?;

        debug!(
            "Received chat completion response with {} choices",
            response.choices.len()
        );

        Ok(response)
    }
}
