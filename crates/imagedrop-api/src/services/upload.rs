//! Upload ingestion service
//!
//! Orchestrates one ingestion: extract the `file` multipart field, validate
//! it, write the blob under a storage-unique name, insert the metadata
//! record, and assemble the response payload. Steps run strictly in order;
//! nothing touches the blob sink before validation passes.

use axum::extract::Multipart;
use imagedrop_core::{AppError, StoredFile, UploadValidator, UploadedFile, ValidationError};
use imagedrop_storage::image_key;
use uuid::Uuid;

use crate::state::AppState;

/// Derive a storage-unique filename for an accepted upload: the `file` field
/// tag, a random v4 UUID, and the original file's lower-cased extension.
/// Uniqueness does not depend on wall-clock resolution, so concurrent
/// ingestions cannot collide.
fn derive_filename(original_filename: &str) -> Result<String, ValidationError> {
    let extension = UploadValidator::extension(original_filename)?;
    Ok(format!("file_{}.{}", Uuid::new_v4(), extension))
}

pub struct UploadService<'a> {
    state: &'a AppState,
}

impl<'a> UploadService<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    /// Run the full ingestion pipeline for one multipart request.
    pub async fn ingest(&self, mut multipart: Multipart) -> Result<UploadedFile, AppError> {
        // Locate the single `file` field; anything else in the body is ignored.
        let field = loop {
            match multipart.next_field().await.map_err(|e| {
                AppError::BadRequest(format!("Malformed multipart body: {}", e))
            })? {
                Some(field) if field.name() == Some("file") => break field,
                Some(_) => continue,
                None => return Err(AppError::NoFile),
            }
        };

        let original_filename = field
            .file_name()
            .map(str::to_string)
            .filter(|name| !name.is_empty())
            .ok_or(AppError::NoFile)?;
        let content_type = field
            .content_type()
            .map(str::to_string)
            .unwrap_or_else(|| "application/octet-stream".to_string());

        // Cheap declared-type checks before buffering the payload.
        self.state.validator.validate_extension(&original_filename)?;
        self.state.validator.validate_content_type(&content_type)?;

        let data = field.bytes().await.map_err(|e| {
            AppError::BadRequest(format!("Failed to read upload body: {}", e))
        })?;
        self.state.validator.validate_file_size(data.len())?;

        let filename = derive_filename(&original_filename)?;
        let storage_key = image_key(&filename);

        let written = self
            .state
            .storage
            .put(&storage_key, data.to_vec())
            .await
            .map_err(|e| AppError::StorageWrite(e.to_string()))?;

        let path = StoredFile::public_path(&filename);
        let record = match self
            .state
            .files
            .insert(&filename, &path, written as i64, &content_type)
            .await
        {
            Ok(record) => record,
            Err(e) => {
                // The blob is already durable; delete it so a failed insert
                // leaves no unreferenced file behind.
                let storage = self.state.storage.clone();
                tokio::spawn(async move {
                    if let Err(cleanup_err) = storage.delete(&storage_key).await {
                        tracing::warn!(
                            error = %cleanup_err,
                            storage_key = %storage_key,
                            "Failed to clean up blob after metadata insert error"
                        );
                    }
                });
                return Err(e);
            }
        };

        tracing::info!(
            id = %record.id,
            filename = %record.filename,
            size_bytes = record.size,
            mimetype = %record.mimetype,
            "File ingested"
        );

        Ok(UploadedFile::from_record(
            &record,
            &self.state.config.public_base_url,
        ))
    }
}
