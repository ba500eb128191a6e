use crate::{Error, document::DocumentType};
use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde::{Serialize, Serializer, ser::SerializeMap};
use std::collections::BTreeMap;

pub const SERVICE_NAME: &str = "Document OCR API";
pub const API_VERSION: &str = "1.0";
pub const NOT_FOUND_MESSAGE: &str = "Endpoint not found";
pub const METHOD_NOT_ALLOWED_MESSAGE: &str = "Method not allowed";

#[derive(Debug, Serialize)]
pub struct IndexResponse {
    pub message: String,
    pub version: String,
    pub endpoints: BTreeMap<String, String>,
    pub usage: String,
}

impl IndexResponse {
    pub fn new() -> Self {
        Self {
            message: SERVICE_NAME.to_string(),
            version: API_VERSION.to_string(),
            endpoints: DocumentType::ALL
                .iter()
                .map(|doc| (doc.route(), doc.description().to_string()))
                .collect(),
            usage: "Send POST request with 'image' file in form-data".to_string(),
        }
    }
}

impl Default for IndexResponse {
    fn default() -> Self {
        Self::new()
    }
}

/// `{status: "success", document_type, <result_key>: data}`; the last key
/// depends on the document type.
#[derive(Debug)]
pub struct ExtractionResponse {
    pub document: DocumentType,
    pub data: String,
}

impl Serialize for ExtractionResponse {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(3))?;
        map.serialize_entry("status", "success")?;
        map.serialize_entry("document_type", self.document.slug())?;
        map.serialize_entry(self.document.result_key(), &self.data)?;
        map.end()
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

/// Body for failures past validation (upstream or transport).
#[derive(Debug, Serialize)]
pub struct RelayErrorResponse {
    pub status: &'static str,
    pub error: String,
    pub details: String,
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if self.is_client_error() {
            return (status, Json(ErrorResponse::new(self.to_string()))).into_response();
        }

        let body = RelayErrorResponse {
            status: "error",
            error: self.to_string(),
            details: self.details().unwrap_or_default().to_string(),
        };
        (status, Json(body)).into_response()
    }
}

pub fn json_error(status: StatusCode, message: impl Into<String>) -> Response {
    (status, Json(ErrorResponse::new(message))).into_response()
}
