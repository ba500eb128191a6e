use super::mocks::MockLlmClient;
use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, Response},
};
use doc_relay::{
    config::{Config, UpstreamConfig},
    extract::Extractor,
    llm::LlmClient,
    server::{self, handlers::AppState},
};
use serde_json::Value;
use std::sync::Arc;

pub const BOUNDARY: &str = "doc-relay-test-boundary";
pub const DEFAULT_LIMIT: usize = 16 * 1024 * 1024;

/// One multipart part: field name, optional filename, content.
pub type Part<'a> = (&'a str, Option<&'a str>, &'a [u8]);

/// Create a test configuration with sensible defaults
pub fn create_test_config() -> Config {
    let mut config = Config::default();
    config.upstream.api_key = "test-api-key".to_string();
    config
}

pub fn create_test_app(client: MockLlmClient) -> Router {
    create_test_app_with(Arc::new(client), &create_test_config().upstream, DEFAULT_LIMIT)
}

pub fn create_test_app_with(
    client: Arc<dyn LlmClient>,
    upstream: &UpstreamConfig,
    max_body_bytes: usize,
) -> Router {
    server::router(AppState {
        extractor: Extractor::new(client, upstream),
        max_body_bytes,
    })
}

pub fn multipart_body(parts: &[Part<'_>]) -> Vec<u8> {
    let mut body = Vec::new();
    for (name, filename, data) in parts {
        body.extend_from_slice(format!("--{}\r\n", BOUNDARY).as_bytes());
        let disposition = match filename {
            Some(f) => format!(
                "Content-Disposition: form-data; name=\"{}\"; filename=\"{}\"\r\nContent-Type: application/octet-stream\r\n\r\n",
                name, f
            ),
            None => format!("Content-Disposition: form-data; name=\"{}\"\r\n\r\n", name),
        };
        body.extend_from_slice(disposition.as_bytes());
        body.extend_from_slice(data);
        body.extend_from_slice(b"\r\n");
    }
    body.extend_from_slice(format!("--{}--\r\n", BOUNDARY).as_bytes());
    body
}

pub fn multipart_request(uri: &str, parts: &[Part<'_>]) -> Request<Body> {
    let body = multipart_body(parts);
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(
            "content-type",
            format!("multipart/form-data; boundary={}", BOUNDARY),
        )
        .header("content-length", body.len())
        .body(Body::from(body))
        .unwrap()
}

pub fn image_request(uri: &str, filename: &str, data: &[u8]) -> Request<Body> {
    multipart_request(uri, &[("image", Some(filename), data)])
}

pub async fn body_json(response: Response<Body>) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}
