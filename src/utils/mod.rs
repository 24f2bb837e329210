//! Utility modules for error handling, configuration, and file saving

pub mod config;
pub mod error;
pub mod files;

// Re-export for convenience
pub use config::AppSettings;
pub use error::TubeflowError;
pub use files::{sanitize_filename, save_media};
