//! Application setup and initialization
//!
//! All initialization logic lives here rather than in main.rs: validate
//! configuration, connect the metadata store, open the blob sink, and wire
//! the routes. Fail fast on misconfiguration, before accepting requests.

pub mod database;
pub mod routes;
pub mod server;
pub mod storage;

use crate::state::AppState;
use anyhow::{Context, Result};
use imagedrop_core::Config;
use std::sync::Arc;

/// Initialize the entire application
pub async fn initialize_app(config: Config) -> Result<(Arc<AppState>, axum::Router)> {
    config
        .validate()
        .context("Configuration validation failed")?;

    tracing::info!("Configuration loaded and validated successfully");

    // Setup database
    let pool = database::setup_database(&config).await?;

    // Setup blob storage
    let storage = storage::setup_storage(&config).await?;

    let state = Arc::new(AppState::new(config.clone(), pool, storage));

    // Setup routes
    let router = routes::setup_routes(&config, state.clone());

    Ok((state, router))
}
