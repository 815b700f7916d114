//! Error types module
//!
//! The error taxonomy for one ingestion or listing call. Caller mistakes
//! (missing file, failed validation) carry their specific reason and map to
//! 400-class responses; infrastructure faults (blob sink, metadata store)
//! map to 500-class responses with a generic client message, with the
//! internal detail logged server-side only.
//!
//! The metadata-store variants are gated behind the `sqlx` feature. With
//! `default-features = false` they carry plain strings instead of a
//! `sqlx::Error` source.

use crate::validation::ValidationError;

#[cfg(feature = "sqlx")]
use sqlx::Error as SqlxError;

/// Log level for error reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    /// Expected errors like validation failures
    Debug,
    /// Caller mistakes worth operator attention
    Warn,
    /// Unexpected infrastructure failures
    Error,
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("No file uploaded")]
    NoFile,

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Blob write failed: {0}")]
    StorageWrite(String),

    #[cfg(feature = "sqlx")]
    #[error("Metadata insert failed: {0}")]
    MetadataPersist(#[source] SqlxError),

    #[cfg(not(feature = "sqlx"))]
    #[error("Metadata insert failed: {0}")]
    MetadataPersist(String),

    #[cfg(feature = "sqlx")]
    #[error("Metadata read failed: {0}")]
    MetadataRead(#[source] SqlxError),

    #[cfg(not(feature = "sqlx"))]
    #[error("Metadata read failed: {0}")]
    MetadataRead(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// HTTP status code this error maps to at the API boundary.
    pub fn http_status_code(&self) -> u16 {
        match self {
            AppError::NoFile | AppError::Validation(_) | AppError::BadRequest(_) => 400,
            AppError::StorageWrite(_)
            | AppError::MetadataPersist(_)
            | AppError::MetadataRead(_)
            | AppError::Internal(_) => 500,
        }
    }

    /// Client-facing message. Caller mistakes carry the specific reason;
    /// infrastructure faults never expose internal error text.
    pub fn client_message(&self) -> String {
        match self {
            AppError::NoFile => "No file uploaded".to_string(),
            AppError::Validation(reason) => reason.to_string(),
            AppError::BadRequest(reason) => reason.clone(),
            AppError::StorageWrite(_) | AppError::MetadataPersist(_) => {
                "Server error during upload".to_string()
            }
            AppError::MetadataRead(_) => "Failed to read file metadata".to_string(),
            AppError::Internal(_) => "Something went wrong!".to_string(),
        }
    }

    pub fn log_level(&self) -> LogLevel {
        match self {
            AppError::NoFile => LogLevel::Debug,
            AppError::Validation(_) => LogLevel::Debug,
            AppError::BadRequest(_) => LogLevel::Warn,
            AppError::StorageWrite(_)
            | AppError::MetadataPersist(_)
            | AppError::MetadataRead(_)
            | AppError::Internal(_) => LogLevel::Error,
        }
    }

    /// Short machine-readable tag for structured logs.
    pub fn error_type(&self) -> &'static str {
        match self {
            AppError::NoFile => "no_file",
            AppError::Validation(_) => "invalid_file",
            AppError::BadRequest(_) => "bad_request",
            AppError::StorageWrite(_) => "storage_write",
            AppError::MetadataPersist(_) => "metadata_persist",
            AppError::MetadataRead(_) => "metadata_read",
            AppError::Internal(_) => "internal",
        }
    }
}
