//! Saving downloaded media to disk

use crate::utils::error::TubeflowError;
use std::path::{Path, PathBuf};
use tracing::info;

/// Sanitize filename for filesystem
pub fn sanitize_filename(name: &str) -> String {
    name.chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
            _ => c,
        })
        .collect()
}

/// Write downloaded bytes into `dir` as `<sanitized title>.<ext>`
pub async fn save_media(
    dir: &Path,
    title: &str,
    ext: &str,
    bytes: &[u8],
) -> Result<PathBuf, TubeflowError> {
    tokio::fs::create_dir_all(dir).await?;

    let path = dir.join(format!("{}.{}", sanitize_filename(title), ext));
    tokio::fs::write(&path, bytes).await?;

    info!("Saved {} bytes to {}", bytes.len(), path.display());
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_replaces_separators() {
        assert_eq!(sanitize_filename("a/b\\c:d"), "a_b_c_d");
        assert_eq!(sanitize_filename("what? \"why\""), "what_ _why_");
    }

    #[test]
    fn test_sanitize_keeps_plain_titles() {
        assert_eq!(sanitize_filename("Sample Video 720p"), "Sample Video 720p");
    }

    #[tokio::test]
    async fn test_save_media_uses_title_and_extension() {
        let temp = tempfile::TempDir::new().expect("temp dir");
        let path = save_media(temp.path(), "My: Video", "mp4", b"bytes")
            .await
            .expect("save");

        assert_eq!(path.file_name().unwrap().to_string_lossy(), "My_ Video.mp4");
        assert_eq!(std::fs::read(&path).unwrap(), b"bytes");
    }
}
