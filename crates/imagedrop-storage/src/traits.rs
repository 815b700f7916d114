//! Storage abstraction trait
//!
//! The blob sink as the ingestion pipeline sees it: write a payload under a
//! key, and delete/inspect it by key. Serving stored blobs is the transport
//! layer's concern.

use async_trait::async_trait;
use thiserror::Error;

/// Storage operation errors
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Upload failed: {0}")]
    UploadFailed(String),

    #[error("Delete failed: {0}")]
    DeleteFailed(String),

    #[error("File not found: {0}")]
    NotFound(String),

    #[error("Invalid storage key: {0}")]
    InvalidKey(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

/// Result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;

/// Blob sink abstraction
///
/// The ingestion pipeline works against this trait so it never couples to a
/// concrete backend. A write is durable once `put` returns: partial writes
/// must not be observable under the key.
#[async_trait]
pub trait Storage: Send + Sync {
    /// Write a payload under the given key, creating or replacing it.
    /// Returns the number of bytes written.
    async fn put(&self, storage_key: &str, data: Vec<u8>) -> StorageResult<usize>;

    /// Delete a blob by key. Deleting a missing blob is not an error.
    async fn delete(&self, storage_key: &str) -> StorageResult<()>;

    /// Check whether a blob exists.
    async fn exists(&self, storage_key: &str) -> StorageResult<bool>;

    /// Size in bytes of a stored blob.
    async fn content_length(&self, storage_key: &str) -> StorageResult<u64>;
}
