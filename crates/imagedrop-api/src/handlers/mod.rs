mod files;
mod health;
mod upload;

pub use files::list_files;
pub use health::health;
pub use upload::upload_file;
