use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[cfg(feature = "sqlx")]
use sqlx::FromRow;

/// A stored file record: one row in the metadata store, mapped 1:1 to one
/// blob in the sink, addressed by `path`. Created once per successful
/// ingestion and never updated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(FromRow))]
pub struct StoredFile {
    /// Assigned by the metadata store on insert; never reused.
    pub id: Uuid,
    /// Server-generated name, unique within the sink's namespace.
    pub filename: String,
    /// Relative location within the blob sink, `/public/images/{filename}`.
    pub path: String,
    pub size: i64,
    pub mimetype: String,
    #[serde(rename = "uploadedAt")]
    pub uploaded_at: DateTime<Utc>,
}

impl StoredFile {
    /// Public path under which the blob is served.
    pub fn public_path(filename: &str) -> String {
        format!("/public/images/{}", filename)
    }

    /// Fully-qualified retrieval URL for this record.
    pub fn url(&self, public_base_url: &str) -> String {
        format!("{}{}", public_base_url, self.path)
    }
}

/// Response payload for a successful upload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadedFile {
    pub id: Uuid,
    pub filename: String,
    pub url: String,
    pub size: i64,
    pub mimetype: String,
}

impl UploadedFile {
    pub fn from_record(record: &StoredFile, public_base_url: &str) -> Self {
        UploadedFile {
            id: record.id,
            filename: record.filename.clone(),
            url: record.url(public_base_url),
            size: record.size,
            mimetype: record.mimetype.clone(),
        }
    }
}
