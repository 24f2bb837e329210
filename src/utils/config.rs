//! Application configuration

use std::path::PathBuf;
use std::time::Duration;

/// Application settings
#[derive(Debug, Clone)]
pub struct AppSettings {
    /// Base URL of the local engine process
    pub engine_url: String,

    /// Directory downloaded files are saved to
    pub download_location: PathBuf,

    /// Interval between liveness probes
    pub poll_interval: Duration,

    /// Per-probe request timeout
    pub probe_timeout: Duration,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            engine_url: "http://127.0.0.1:5000".to_string(),
            download_location: dirs::download_dir().unwrap_or_else(|| PathBuf::from("./downloads")),
            poll_interval: Duration::from_secs(5),
            probe_timeout: Duration::from_secs(2),
        }
    }
}
