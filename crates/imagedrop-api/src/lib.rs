//! Imagedrop API Library
//!
//! HTTP surface of the service: handlers, the upload service, application
//! state, and setup (database, storage, routes, server).

mod handlers;
mod services;

// Public modules
pub mod error;
pub mod setup;
pub mod state;
pub mod telemetry;

// Re-exports
pub use error::ErrorBody;
