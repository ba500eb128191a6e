use crate::{
    Error, Result,
    config::{DataUriLabel, UpstreamConfig},
    document::DocumentType,
    llm::{ChatCompletionRequest, ChatMessage, LlmClient, image_data_uri},
    upload::Upload,
};
use std::sync::Arc;
use tracing::{debug, info};

/// Turns an accepted upload into the model's text reply for one document type.
#[derive(Clone)]
pub struct Extractor {
    client: Arc<dyn LlmClient>,
    model: String,
    data_uri_label: DataUriLabel,
}

impl Extractor {
    pub fn new(client: Arc<dyn LlmClient>, config: &UpstreamConfig) -> Self {
        Self {
            client,
            model: config.model.clone(),
            data_uri_label: config.data_uri_label,
        }
    }

    pub fn build_request(&self, document: DocumentType, upload: &Upload) -> ChatCompletionRequest {
        let mime_type = match self.data_uri_label {
            DataUriLabel::Png => "image/png",
            DataUriLabel::Extension => upload.mime_type(),
        };

        ChatCompletionRequest {
            model: self.model.clone(),
            messages: vec![ChatMessage::user_with_image(
                document.prompt(),
                image_data_uri(&upload.bytes, mime_type),
            )],
        }
    }

    /// One upstream call. The reply is passed through untouched, even though
    /// the prompts ask for JSON.
    pub async fn extract(&self, document: DocumentType, upload: &Upload) -> Result<String> {
        let request = self.build_request(document, upload);

        info!(
            document = %document,
            image_size = upload.bytes.len(),
            "Forwarding image to upstream model"
        );

        let response = self.client.create_chat_completion(request).await?;

        match response.first_content() {
            Some(content) => {
                debug!(document = %document, reply_len = content.len(), "Upstream replied");
                Ok(content.to_string())
            }
            None => Err(Error::NoResponse),
        }
    }
}
