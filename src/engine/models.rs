//! Wire models for the local engine's HTTP API

use crate::utils::error::TubeflowError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Quality labels offered when the engine omits `availableQualities`
pub const DEFAULT_QUALITIES: [&str; 3] = ["360p", "720p", "1080p"];

/// Resolved video metadata, one record per successful `/info` query
#[derive(Debug, Clone, PartialEq)]
pub struct VideoMetadata {
    pub title: String,
    pub author: String,
    pub duration: String,
    pub thumbnail: String,
    pub views: String,
    pub available_qualities: Vec<String>,
}

/// Raw `/info` payload. Every field is optional so a partial response
/// still resolves; fallbacks are applied in the conversion below.
#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct RawMetadata {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub duration: Option<String>,
    #[serde(default)]
    pub thumbnail: Option<String>,
    #[serde(default)]
    pub views: Option<String>,
    #[serde(default, rename = "availableQualities")]
    pub available_qualities: Option<Vec<String>>,
}

impl From<RawMetadata> for VideoMetadata {
    fn from(raw: RawMetadata) -> Self {
        Self {
            title: text_or(raw.title, "Unknown video"),
            author: text_or(raw.author, "Unknown channel"),
            duration: text_or(raw.duration, "00:00"),
            thumbnail: text_or(raw.thumbnail, "https://picsum.photos/640/360"),
            views: text_or(raw.views, "0"),
            available_qualities: raw.available_qualities.unwrap_or_else(|| {
                DEFAULT_QUALITIES.iter().map(|q| q.to_string()).collect()
            }),
        }
    }
}

/// Empty and whitespace-only strings count as missing; without this an
/// empty title would later save the download as a bare `.mp4` file.
fn text_or(value: Option<String>, fallback: &str) -> String {
    match value {
        Some(s) if !s.trim().is_empty() => s,
        _ => fallback.to_string(),
    }
}

/// `/health` payload
#[derive(Debug, Clone, Deserialize)]
pub struct EngineHealth {
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub engine: String,
}

impl EngineHealth {
    /// Only an explicit `"running"` status counts as up
    pub fn is_running(&self) -> bool {
        self.status == "running"
    }
}

/// Structured error body returned by the engine on non-2xx responses
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ErrorBody {
    pub error: String,
}

/// `/info` request body
#[derive(Debug, Serialize)]
pub(crate) struct InfoRequest<'a> {
    pub url: &'a str,
}

/// `/download` request body; format and quality strings go through verbatim
#[derive(Debug, Serialize)]
pub(crate) struct DownloadRequest<'a> {
    pub url: &'a str,
    pub format: &'a str,
    pub quality: &'a str,
}

/// Output container format; serialized to the engine through `as_str`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DownloadFormat {
    Mp4,
    Mp3,
}

impl DownloadFormat {
    /// Wire representation sent to the engine
    pub fn as_str(&self) -> &'static str {
        match self {
            DownloadFormat::Mp4 => "MP4",
            DownloadFormat::Mp3 => "MP3",
        }
    }

    /// Extension used for the saved file
    pub fn extension(&self) -> &'static str {
        match self {
            DownloadFormat::Mp4 => "mp4",
            DownloadFormat::Mp3 => "mp3",
        }
    }

    /// Quality vocabulary this format accepts, lowest first
    pub fn quality_labels(&self) -> &'static [&'static str] {
        match self {
            DownloadFormat::Mp4 => &["360p", "720p", "1080p", "4K"],
            DownloadFormat::Mp3 => &["128kbps", "192kbps", "320kbps"],
        }
    }

    /// Quality preselected when this format is chosen
    pub fn default_quality(&self) -> Quality {
        match self {
            DownloadFormat::Mp4 => Quality::Video(VideoQuality::P720),
            DownloadFormat::Mp3 => Quality::Audio(AudioQuality::Kbps320),
        }
    }
}

impl fmt::Display for DownloadFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Video rendition quality
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VideoQuality {
    P360,
    P720,
    P1080,
    P4K,
}

impl VideoQuality {
    pub fn as_str(&self) -> &'static str {
        match self {
            VideoQuality::P360 => "360p",
            VideoQuality::P720 => "720p",
            VideoQuality::P1080 => "1080p",
            VideoQuality::P4K => "4K",
        }
    }
}

/// Audio rendition quality
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AudioQuality {
    Kbps128,
    Kbps192,
    Kbps320,
}

impl AudioQuality {
    pub fn as_str(&self) -> &'static str {
        match self {
            AudioQuality::Kbps128 => "128kbps",
            AudioQuality::Kbps192 => "192kbps",
            AudioQuality::Kbps320 => "320kbps",
        }
    }
}

/// A quality selection consistent with a download format. The vocabulary
/// is closed: unrecognized labels are rejected before any request is made.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Quality {
    Video(VideoQuality),
    Audio(AudioQuality),
}

impl Quality {
    /// Parse a quality label against the selected format
    pub fn parse(format: DownloadFormat, label: &str) -> Result<Self, TubeflowError> {
        let quality = match format {
            DownloadFormat::Mp4 => match label {
                "360p" => Some(Quality::Video(VideoQuality::P360)),
                "720p" => Some(Quality::Video(VideoQuality::P720)),
                "1080p" => Some(Quality::Video(VideoQuality::P1080)),
                "4K" => Some(Quality::Video(VideoQuality::P4K)),
                _ => None,
            },
            DownloadFormat::Mp3 => match label {
                "128kbps" => Some(Quality::Audio(AudioQuality::Kbps128)),
                "192kbps" => Some(Quality::Audio(AudioQuality::Kbps192)),
                "320kbps" => Some(Quality::Audio(AudioQuality::Kbps320)),
                _ => None,
            },
        };

        quality.ok_or_else(|| TubeflowError::UnsupportedQuality {
            format: format.as_str().to_string(),
            quality: label.to_string(),
        })
    }

    /// Wire representation sent to the engine
    pub fn as_str(&self) -> &'static str {
        match self {
            Quality::Video(q) => q.as_str(),
            Quality::Audio(q) => q.as_str(),
        }
    }
}

impl fmt::Display for Quality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
