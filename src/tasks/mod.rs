//! Download tasks: model, owned store, and execution

pub mod store;

pub use store::TaskStore;

use crate::engine::{DownloadFormat, EngineClient, Quality};
use crate::utils::error::TubeflowError;
use crate::utils::files::save_media;
use chrono::{DateTime, Utc};
use std::path::{Path, PathBuf};
use tracing::info;

/// One user-initiated request to retrieve a rendition of a resolved video.
/// Only `status`, `progress`, and `file_path` mutate after creation.
#[derive(Debug, Clone)]
pub struct DownloadTask {
    pub id: String,
    pub url: String,
    pub title: String,
    pub format: DownloadFormat,
    pub quality: Quality,
    pub status: TaskStatus,
    /// Either 0 or 100; the engine reports no intermediate progress
    pub progress: u8,
    pub created_at: DateTime<Utc>,
    pub file_path: Option<PathBuf>,
}

impl DownloadTask {
    /// Create a new task in the pending state
    pub fn new(
        url: impl Into<String>,
        title: impl Into<String>,
        format: DownloadFormat,
        quality: Quality,
    ) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            url: url.into(),
            title: title.into(),
            format,
            quality,
            status: TaskStatus::Pending,
            progress: 0,
            created_at: Utc::now(),
            file_path: None,
        }
    }
}

/// Task status
#[derive(Debug, Clone, PartialEq)]
pub enum TaskStatus {
    Pending,
    Downloading,
    Completed,
    Failed(String),
}

impl TaskStatus {
    /// Short label for display
    pub fn label(&self) -> &'static str {
        match self {
            TaskStatus::Pending => "Pending",
            TaskStatus::Downloading => "Downloading",
            TaskStatus::Completed => "Completed",
            TaskStatus::Failed(_) => "Failed",
        }
    }
}

/// Execute one download attempt: fetch the rendition from the engine and
/// save it as `<title>.<ext>` under `download_dir`. Errors are returned to
/// the caller, which turns them into a failed-state transition; they never
/// propagate further.
pub async fn run_download(
    client: &EngineClient,
    url: &str,
    title: &str,
    format: DownloadFormat,
    quality: Quality,
    download_dir: &Path,
) -> Result<PathBuf, TubeflowError> {
    let bytes = client.download(url, format, quality).await?;
    let path = save_media(download_dir, title, format.extension(), &bytes).await?;

    info!("Download finished: {}", path.display());
    Ok(path)
}
