//! HTTP client for the local download engine
//!
//! The engine is an external process wrapping yt-dlp behind three routes:
//! `GET /health`, `POST /info`, and `POST /download`. This client owns the
//! error translation at that boundary: structured engine errors are passed
//! through verbatim, while transport failures map to a distinct
//! "engine unreachable" variant so the UI can point the user at setup.

use crate::engine::models::{
    DownloadFormat, DownloadRequest, ErrorBody, InfoRequest, Quality, RawMetadata, VideoMetadata,
};
use crate::utils::error::TubeflowError;
use std::time::Duration;
use tracing::{debug, warn};

/// Client for the engine's HTTP API
#[derive(Debug, Clone)]
pub struct EngineClient {
    http: reqwest::Client,
    base_url: String,
}

impl EngineClient {
    /// Create a client for the engine at `base_url`
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Probe `/health` once. Any transport error, timeout, non-2xx status,
    /// or payload without `status == "running"` counts as down.
    pub async fn check_health(&self, timeout: Duration) -> bool {
        let url = format!("{}/health", self.base_url);

        match self.http.get(&url).timeout(timeout).send().await {
            Ok(resp) if resp.status().is_success() => {
                match resp.json::<crate::engine::models::EngineHealth>().await {
                    Ok(health) => health.is_running(),
                    Err(e) => {
                        debug!("Health payload not recognized: {}", e);
                        false
                    }
                }
            }
            Ok(resp) => {
                debug!("Health probe returned HTTP {}", resp.status());
                false
            }
            Err(e) => {
                debug!("Health probe failed: {}", e);
                false
            }
        }
    }

    /// Resolve a URL into video metadata via `POST /info`
    pub async fn fetch_metadata(&self, url: &str) -> Result<VideoMetadata, TubeflowError> {
        if url.trim().is_empty() {
            return Err(TubeflowError::EmptyUrl);
        }

        debug!("Resolving metadata for {}", url);

        let resp = self
            .http
            .post(format!("{}/info", self.base_url))
            .json(&InfoRequest { url })
            .send()
            .await
            .map_err(map_transport)?;

        if !resp.status().is_success() {
            return Err(engine_error(resp).await);
        }

        let raw: RawMetadata = resp.json().await.map_err(map_transport)?;
        Ok(raw.into())
    }

    /// Request a rendition via `POST /download` and return the file bytes
    pub async fn download(
        &self,
        url: &str,
        format: DownloadFormat,
        quality: Quality,
    ) -> Result<Vec<u8>, TubeflowError> {
        debug!("Requesting {} {} download for {}", format, quality, url);

        let resp = self
            .http
            .post(format!("{}/download", self.base_url))
            .json(&DownloadRequest {
                url,
                format: format.as_str(),
                quality: quality.as_str(),
            })
            .send()
            .await
            .map_err(map_transport)?;

        if !resp.status().is_success() {
            return Err(engine_error(resp).await);
        }

        let bytes = resp.bytes().await.map_err(map_transport)?;
        Ok(bytes.to_vec())
    }

    /// Fetch thumbnail bytes for display; the URL is whatever `/info` returned
    pub async fn fetch_thumbnail(&self, url: &str) -> Result<Vec<u8>, TubeflowError> {
        let resp = self
            .http
            .get(url)
            .send()
            .await
            .map_err(map_transport)?
            .error_for_status()?;

        let bytes = resp.bytes().await?;
        Ok(bytes.to_vec())
    }
}

/// Convert a non-2xx engine response into an error, keeping the engine's
/// own message when the body carries one.
async fn engine_error(resp: reqwest::Response) -> TubeflowError {
    let status = resp.status();

    let body = resp.text().await.unwrap_or_default();
    match serde_json::from_str::<ErrorBody>(&body) {
        Ok(parsed) => TubeflowError::Engine(parsed.error),
        Err(e) => {
            warn!("Engine error body was not structured: {}", e);
            TubeflowError::Engine(format!("Engine returned HTTP {}", status))
        }
    }
}

/// Classify a transport failure: connection and timeout problems mean the
/// engine process is not there to talk to.
fn map_transport(err: reqwest::Error) -> TubeflowError {
    if err.is_connect() || err.is_timeout() {
        TubeflowError::EngineUnreachable
    } else {
        TubeflowError::Network(err)
    }
}
