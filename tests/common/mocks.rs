use async_trait::async_trait;
use doc_relay::{
    Error, Result,
    llm::{ChatCompletionRequest, ChatCompletionResponse, Choice, LlmClient, ResponseMessage},
};
use std::sync::{Arc, Mutex};

/// Mock LLM client for testing
#[derive(Debug, Clone)]
pub struct MockLlmClient {
    pub responses: Arc<Mutex<Vec<ChatCompletionResponse>>>,
    pub requests: Arc<Mutex<Vec<ChatCompletionRequest>>>,
    pub upstream_error: Option<(u16, String)>,
}

impl MockLlmClient {
    pub fn new() -> Self {
        Self {
            responses: Arc::new(Mutex::new(Vec::new())),
            requests: Arc::new(Mutex::new(Vec::new())),
            upstream_error: None,
        }
    }

    pub fn replying(content: &str) -> Self {
        let client = Self::new();
        client.add_response(create_text_response(content));
        client
    }

    /// Every call fails as if the upstream answered `status` with `body`.
    pub fn with_upstream_error(mut self, status: u16, body: &str) -> Self {
        self.upstream_error = Some((status, body.to_string()));
        self
    }

    pub fn add_response(&self, response: ChatCompletionResponse) {
        self.responses.lock().unwrap().push(response);
    }

    pub fn get_requests(&self) -> Vec<ChatCompletionRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl LlmClient for MockLlmClient {
    async fn create_chat_completion(
        &self,
        request: ChatCompletionRequest,
    ) -> Result<ChatCompletionResponse> {
        self.requests.lock().unwrap().push(request);

        if let Some((status, body)) = &self.upstream_error {
            return Err(Error::Upstream {
                status: *status,
                body: body.clone(),
            });
        }

        let mut responses = self.responses.lock().unwrap();
        assert!(!responses.is_empty(), "No more mock responses available");

        Ok(responses.remove(0))
    }
}

impl Default for MockLlmClient {
    fn default() -> Self {
        Self::new()
    }
}

/// Response with a single assistant choice
pub fn create_text_response(content: &str) -> ChatCompletionResponse {
    ChatCompletionResponse {
        id: Some("gen-test".to_string()),
        model: Some("meta-llama/llama-4-maverick:free".to_string()),
        choices: vec![Choice {
            index: 0,
            message: ResponseMessage {
                role: Some("assistant".to_string()),
                content: content.to_string(),
            },
            finish_reason: Some("stop".to_string()),
        }],
        usage: None,
    }
}

/// Response with no choices at all
pub fn create_empty_response() -> ChatCompletionResponse {
    ChatCompletionResponse::default()
}
