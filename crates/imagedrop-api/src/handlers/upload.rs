use std::sync::Arc;

use axum::{
    extract::{Multipart, State},
    Json,
};
use imagedrop_core::UploadedFile;
use serde::Serialize;

use crate::error::HttpAppError;
use crate::services::UploadService;
use crate::state::AppState;

/// Success body for `POST /upload`.
#[derive(Debug, Serialize)]
pub struct UploadResponse {
    pub message: String,
    pub file: UploadedFile,
}

/// Upload handler
///
/// Delegates the whole ingestion pipeline to [`UploadService`]; on success
/// returns the stored file's identifier, server-assigned filename, retrieval
/// URL, size, and mimetype.
#[tracing::instrument(skip(state, multipart), fields(operation = "upload"))]
pub async fn upload_file(
    State(state): State<Arc<AppState>>,
    multipart: Multipart,
) -> Result<Json<UploadResponse>, HttpAppError> {
    let file = UploadService::new(&state).ingest(multipart).await?;

    Ok(Json(UploadResponse {
        message: "File uploaded successfully".to_string(),
        file,
    }))
}
