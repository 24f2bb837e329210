//! Local engine integration: HTTP client, wire models, and the bundled
//! setup script

pub mod client;
pub mod models;
pub mod script;

pub use client::EngineClient;
pub use models::{
    AudioQuality, DownloadFormat, EngineHealth, Quality, VideoMetadata, VideoQuality,
};
pub use script::{ENGINE_INSTALL_COMMAND, ENGINE_SETUP_SCRIPT};
