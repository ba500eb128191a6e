use axum::{
    body::Bytes,
    extract::{Multipart, multipart::MultipartError},
    http::StatusCode,
};
use thiserror::Error;
use tracing::{debug, warn};

/// Multipart field that carries the image.
pub const IMAGE_FIELD: &str = "image";

pub const ALLOWED_EXTENSIONS: [&str; 6] = ["png", "jpg", "jpeg", "gif", "bmp", "webp"];

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UploadError {
    #[error("No image file provided")]
    MissingImage,

    #[error("No file selected")]
    EmptyFilename,

    #[error("File type not allowed")]
    DisallowedType,

    #[error("File too large. Maximum size is {}MB", .limit_bytes / (1024 * 1024))]
    PayloadTooLarge { limit_bytes: usize },
}

/// An accepted image upload. The bytes are exactly what the client sent.
#[derive(Debug, Clone)]
pub struct Upload {
    pub filename: String,
    pub bytes: Bytes,
}

impl Upload {
    /// Lowercased suffix after the last `.`.
    pub fn extension(&self) -> Option<String> {
        extension_of(&self.filename)
    }

    /// Media type implied by the extension.
    pub fn mime_type(&self) -> &'static str {
        match self.extension().as_deref() {
            Some("jpg") | Some("jpeg") => "image/jpeg",
            Some("gif") => "image/gif",
            Some("bmp") => "image/bmp",
            Some("webp") => "image/webp",
            _ => "image/png",
        }
    }
}

fn extension_of(filename: &str) -> Option<String> {
    filename
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_lowercase())
}

/// Only the filename is checked; the bytes are never sniffed.
pub fn allowed_file(filename: &str) -> bool {
    extension_of(filename).is_some_and(|ext| ALLOWED_EXTENSIONS.contains(&ext.as_str()))
}

/// Pulls the first file field named `image` out of the form and validates it.
///
/// Plain (non-file) fields named `image` are skipped, as are all other fields.
pub async fn read_image(mut multipart: Multipart, limit_bytes: usize) -> Result<Upload, UploadError> {
    loop {
        let field = match multipart.next_field().await {
            Ok(Some(field)) => field,
            Ok(None) => return Err(UploadError::MissingImage),
            Err(e) => return Err(classify(e, limit_bytes)),
        };

        if field.name() != Some(IMAGE_FIELD) {
            continue;
        }
        let Some(filename) = field.file_name().map(str::to_owned) else {
            continue;
        };

        if filename.is_empty() {
            return Err(UploadError::EmptyFilename);
        }
        if !allowed_file(&filename) {
            debug!(filename = %filename, "Rejected upload extension");
            return Err(UploadError::DisallowedType);
        }

        let bytes = field.bytes().await.map_err(|e| classify(e, limit_bytes))?;
        debug!(filename = %filename, size = bytes.len(), "Accepted image upload");

        return Ok(Upload { filename, bytes });
    }
}

fn classify(err: MultipartError, limit_bytes: usize) -> UploadError {
    if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
        return UploadError::PayloadTooLarge { limit_bytes };
    }
    warn!("Unreadable multipart body: {}", err);
    UploadError::MissingImage
}
