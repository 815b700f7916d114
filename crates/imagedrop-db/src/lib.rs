//! Imagedrop DB Library
//!
//! Metadata-store access: the `files` table repository.

pub mod files;

pub use files::FileRepository;
