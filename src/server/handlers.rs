use super::types::{
    ExtractionResponse, IndexResponse, METHOD_NOT_ALLOWED_MESSAGE, NOT_FOUND_MESSAGE, json_error,
};
use crate::{
    Error,
    document::DocumentType,
    extract::Extractor,
    upload::{UploadError, read_image},
};
use axum::{
    extract::{Multipart, State, multipart::MultipartRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Json, Response},
};
use tracing::{error, info, warn};
use uuid::Uuid;

#[derive(Clone)]
pub struct AppState {
    pub extractor: Extractor,
    pub max_body_bytes: usize,
}

pub async fn index() -> Json<IndexResponse> {
    Json(IndexResponse::new())
}

pub async fn driver_licence(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Response {
    relay(&state, DocumentType::DriverLicence, multipart).await
}

pub async fn car_plate(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Response {
    relay(&state, DocumentType::CarPlate, multipart).await
}

pub async fn carte_gris(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Response {
    relay(&state, DocumentType::CarteGris, multipart).await
}

#[tracing::instrument(
    skip_all,
    fields(document = %document, request_id = %Uuid::new_v4())
)]
async fn relay(
    state: &AppState,
    document: DocumentType,
    multipart: Result<Multipart, MultipartRejection>,
) -> Response {
    // A body that is not multipart at all carries no file.
    let multipart = match multipart {
        Ok(multipart) => multipart,
        Err(rejection) => {
            warn!("Request is not a multipart form: {}", rejection);
            return Error::from(UploadError::MissingImage).into_response();
        }
    };

    let upload = match read_image(multipart, state.max_body_bytes).await {
        Ok(upload) => upload,
        Err(e) => {
            info!("Rejected upload: {}", e);
            return Error::from(e).into_response();
        }
    };

    match state.extractor.extract(document, &upload).await {
        Ok(data) => {
            info!(filename = %upload.filename, "Extraction succeeded");
            Json(ExtractionResponse { document, data }).into_response()
        }
        Err(e) => {
            error!("Extraction failed: {}", e);
            e.into_response()
        }
    }
}

pub async fn not_found() -> Response {
    json_error(StatusCode::NOT_FOUND, NOT_FOUND_MESSAGE)
}

/// Gives the framework's own 405 and 413 responses the same JSON shape as
/// everything else.
pub async fn json_framework_errors(State(state): State<AppState>, response: Response) -> Response {
    match response.status() {
        StatusCode::METHOD_NOT_ALLOWED => {
            let allow = response.headers().get(header::ALLOW).cloned();
            let mut rewritten = json_error(StatusCode::METHOD_NOT_ALLOWED, METHOD_NOT_ALLOWED_MESSAGE);
            if let Some(allow) = allow {
                rewritten.headers_mut().insert(header::ALLOW, allow);
            }
            rewritten
        }
        StatusCode::PAYLOAD_TOO_LARGE => Error::from(UploadError::PayloadTooLarge {
            limit_bytes: state.max_body_bytes,
        })
        .into_response(),
        _ => response,
    }
}
