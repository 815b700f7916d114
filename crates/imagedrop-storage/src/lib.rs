//! Imagedrop Storage Library
//!
//! Blob-sink abstraction and the local filesystem backend.
//!
//! # Storage key format
//!
//! All uploaded blobs live under the `images` collection: `images/{filename}`.
//! Keys must not contain `..` or a leading `/`; key generation is centralized
//! in [`image_key`] so callers and backends stay consistent.

pub mod local;
pub mod traits;

pub use local::LocalStorage;
pub use traits::{Storage, StorageError, StorageResult};

/// Storage key for a file in the `images` collection.
pub fn image_key(filename: &str) -> String {
    format!("images/{}", filename)
}
