use std::sync::Arc;

use axum::{extract::State, Json};
use imagedrop_core::StoredFile;

use crate::error::HttpAppError;
use crate::state::AppState;

/// List handler: all stored files, newest first. An empty store yields an
/// empty array, not an error.
#[tracing::instrument(skip(state), fields(operation = "list_files"))]
pub async fn list_files(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<StoredFile>>, HttpAppError> {
    let files = state.files.list_all().await?;
    Ok(Json(files))
}
