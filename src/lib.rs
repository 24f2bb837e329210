//! TubeFlow library

pub mod engine;
pub mod gui;
pub mod tasks;
pub mod utils;

// Re-export main types for easier use
pub use engine::{
    AudioQuality, DownloadFormat, EngineClient, Quality, VideoMetadata, VideoQuality,
};
pub use gui::{Message, TubeflowApp, View};
pub use tasks::{run_download, DownloadTask, TaskStatus, TaskStore};
pub use utils::{AppSettings, TubeflowError};
