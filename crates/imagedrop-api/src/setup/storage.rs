//! Blob sink setup

use anyhow::{Context, Result};
use imagedrop_core::Config;
use imagedrop_storage::{LocalStorage, Storage};
use std::sync::Arc;

/// Open the local blob sink rooted at the configured storage path. The same
/// directory is served read-only under `/public` by the router.
pub async fn setup_storage(config: &Config) -> Result<Arc<dyn Storage>> {
    let storage = LocalStorage::new(&config.storage_path)
        .await
        .context("Failed to initialize local storage")?;

    tracing::info!(path = %config.storage_path, "Local storage initialized");

    Ok(Arc::new(storage))
}
