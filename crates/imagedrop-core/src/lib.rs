//! Imagedrop Core Library
//!
//! This crate provides the domain models, error types, configuration, and
//! upload validation shared across all imagedrop components.

pub mod config;
pub mod error;
pub mod models;
pub mod validation;

// Re-export commonly used types
pub use config::Config;
pub use error::{AppError, LogLevel};
pub use models::{StoredFile, UploadedFile};
pub use validation::{UploadValidator, ValidationError};
