//! Application state
//!
//! Everything a request handler needs, injected once at startup: the
//! configuration, the metadata-store pool and repository, the blob sink,
//! and the upload validator. No handler reaches for ambient state.

use imagedrop_core::{Config, UploadValidator};
use imagedrop_db::FileRepository;
use imagedrop_storage::Storage;
use sqlx::PgPool;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub pool: PgPool,
    pub files: FileRepository,
    pub storage: Arc<dyn Storage>,
    pub validator: UploadValidator,
}

impl AppState {
    pub fn new(config: Config, pool: PgPool, storage: Arc<dyn Storage>) -> Self {
        let validator = UploadValidator::new(
            config.max_file_size_bytes,
            config.allowed_extensions.clone(),
            config.allowed_content_types.clone(),
        );
        let files = FileRepository::new(pool.clone());

        AppState {
            config,
            pool,
            files,
            storage,
            validator,
        }
    }
}
