//! Error handling for TubeFlow

use thiserror::Error;

/// Main error type for TubeFlow
#[derive(Debug, Error)]
pub enum TubeflowError {
    #[error("Please paste a video URL first")]
    EmptyUrl,

    #[error("Local engine is not reachable. Start the engine process and try again")]
    EngineUnreachable,

    // Engine messages are the primary diagnostic aid; pass them through verbatim.
    #[error("{0}")]
    Engine(String),

    #[error("Quality '{quality}' is not available for {format} downloads")]
    UnsupportedQuality { format: String, quality: String },

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
