//! Blob storage for uploaded files.

use std::path::{Path, PathBuf};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum BlobError {
    #[error("Invalid blob key: {0}")]
    InvalidKey(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Where uploads end up. Keys are relative, `/`-separated paths.
pub trait BlobStore: Send + Sync {
    /// Store `bytes` under `key` and return the public URL.
    fn put(&self, key: &str, bytes: &[u8], content_type: &str) -> Result<String, BlobError>;
}

/// Blobs as plain files under a root directory, served back by the server.
pub struct FsBlobStore {
    root: PathBuf,
    base_url: String,
}

impl FsBlobStore {
    pub fn new(root: impl Into<PathBuf>, base_url: impl Into<String>) -> Self {
        FsBlobStore {
            root: root.into(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl BlobStore for FsBlobStore {
    fn put(&self, key: &str, bytes: &[u8], _content_type: &str) -> Result<String, BlobError> {
        // Content type is recovered from the extension when the file is served
        if key.is_empty() || key.starts_with('/') || key.split('/').any(|p| p == ".." || p.is_empty()) {
            return Err(BlobError::InvalidKey(key.to_string()));
        }

        let path = self.root.join(key);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&path, bytes)?;

        Ok(format!("{}/{}", self.base_url, key))
    }
}

/// Storage key for an upload: `covers/<millis>-<name>-<suffix>.<ext>`.
pub fn cover_key(file_name: &str, now_millis: i64, suffix: &str) -> String {
    let name = sanitize_file_name(file_name);

    match name.rsplit_once('.') {
        Some((stem, ext)) if !stem.is_empty() => {
            format!("covers/{now_millis}-{stem}-{suffix}.{ext}")
        }
        _ => format!("covers/{now_millis}-{name}-{suffix}"),
    }
}

/// Reduce a client-supplied file name to one safe path component.
fn sanitize_file_name(file_name: &str) -> String {
    let base = file_name.rsplit(['/', '\\']).next().unwrap_or_default();

    let cleaned: String = base
        .chars()
        .map(|c| {
            if c.is_alphanumeric() || matches!(c, '.' | '-' | '_') {
                c
            } else {
                '-'
            }
        })
        .collect();
    let cleaned = cleaned.trim_matches('.').to_string();

    if cleaned.is_empty() {
        "file".to_string()
    } else {
        cleaned
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cover_key_keeps_extension() {
        assert_eq!(
            cover_key("beach day.jpg", 1700000000000, "ab12"),
            "covers/1700000000000-beach-day-ab12.jpg"
        );
        assert_eq!(cover_key("README", 1, "x"), "covers/1-README-x");
    }

    #[test]
    fn test_sanitize_strips_directories() {
        assert_eq!(sanitize_file_name("../../etc/passwd"), "passwd");
        assert_eq!(sanitize_file_name("C:\\photos\\us.png"), "us.png");
        assert_eq!(sanitize_file_name(".."), "file");
        assert_eq!(sanitize_file_name(""), "file");
        assert_eq!(sanitize_file_name("我们.jpg"), "我们.jpg");
    }

    #[test]
    fn test_fs_store_writes_file_and_returns_url() {
        let dir = tempfile::tempdir().unwrap();
        let store = FsBlobStore::new(dir.path(), "http://localhost:4096/blobs/");

        let url = store.put("covers/1-a.png", b"png!", "image/png").unwrap();

        assert_eq!(url, "http://localhost:4096/blobs/covers/1-a.png");
        assert_eq!(std::fs::read(dir.path().join("covers/1-a.png")).unwrap(), b"png!");
    }

    #[test]
    fn test_fs_store_rejects_escaping_keys() {
        let dir = tempfile::tempdir().unwrap();
        let store = FsBlobStore::new(dir.path(), "http://x");

        for key in ["", "/abs", "covers/../../x", "covers//x"] {
            assert!(matches!(
                store.put(key, b"", "text/plain"),
                Err(BlobError::InvalidKey(_))
            ));
        }
    }
}
