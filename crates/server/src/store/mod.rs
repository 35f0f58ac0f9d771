//! JSON file persistence for the admin account and the project list.
//!
//! # Data directory
//!
//! - `admin.json` - The single administrator record
//! - `projects.json` - The ordered project collection
//!
//! The directory is created on demand. Reads never fail: a missing or
//! unparsable file degrades to "nothing stored". Writes always report
//! failures to the caller.

pub mod credentials;
pub mod password;
pub mod projects;

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

use projects_hub_core::ProjectId;

pub use credentials::CredentialStore;
pub use password::{hash_password, verify_password};
pub use projects::ProjectStore;

/// Errors that can occur during store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// An admin account is already present.
    #[error("admin account already exists")]
    AlreadyExists,

    /// No project has the requested id.
    #[error("project not found: {0}")]
    NotFound(ProjectId),

    /// Filesystem write failed.
    #[error("storage error: {0}")]
    Io(#[from] std::io::Error),

    /// Document could not be serialized.
    #[error("serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Background hashing task panicked or was cancelled.
    #[error("background task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

/// Result of reading a JSON document from disk.
#[derive(Debug)]
pub(crate) enum Loaded<T> {
    /// The file does not exist.
    Missing,
    /// The file exists but could not be read or parsed.
    Corrupt(String),
    Found(T),
}

/// Read and parse a JSON document.
pub(crate) async fn read_json<T: DeserializeOwned>(path: &Path) -> Loaded<T> {
    let bytes = match tokio::fs::read(path).await {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == ErrorKind::NotFound => return Loaded::Missing,
        Err(e) => return Loaded::Corrupt(e.to_string()),
    };

    match serde_json::from_slice(&bytes) {
        Ok(value) => Loaded::Found(value),
        Err(e) => Loaded::Corrupt(e.to_string()),
    }
}

/// Serialize `value` as pretty JSON and replace `path` with it.
///
/// The parent directory is created if needed. The document is written to a
/// sibling temp file first and renamed over the target, so readers see either
/// the old or the new document.
pub(crate) async fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<(), StoreError> {
    if let Some(dir) = path.parent() {
        tokio::fs::create_dir_all(dir).await?;
    }

    let json = serde_json::to_vec_pretty(value)?;
    let tmp = temp_path(path);
    if let Err(e) = replace_file(&tmp, path, &json).await {
        // A partial temp file must not outlive a failed write.
        let _ = tokio::fs::remove_file(&tmp).await;
        return Err(e.into());
    }

    Ok(())
}

async fn replace_file(tmp: &Path, path: &Path, contents: &[u8]) -> std::io::Result<()> {
    tokio::fs::write(tmp, contents).await?;
    tokio::fs::rename(tmp, path).await
}

fn temp_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().unwrap_or_default().to_os_string();
    name.push(".tmp");
    path.with_file_name(name)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_read_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let loaded: Loaded<serde_json::Value> = read_json(&dir.path().join("nope.json")).await;
        assert!(matches!(loaded, Loaded::Missing));
    }

    #[tokio::test]
    async fn test_read_corrupt_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.json");
        tokio::fs::write(&path, b"{ not json").await.unwrap();

        let loaded: Loaded<serde_json::Value> = read_json(&path).await;
        assert!(matches!(loaded, Loaded::Corrupt(_)));
    }

    #[tokio::test]
    async fn test_write_creates_nested_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("a").join("b").join("doc.json");

        write_json(&path, &serde_json::json!({ "k": 1 })).await.unwrap();

        let loaded: Loaded<serde_json::Value> = read_json(&path).await;
        let Loaded::Found(value) = loaded else {
            panic!("expected document");
        };
        assert_eq!(value["k"], 1);
        assert!(!temp_path(&path).exists());
    }

    #[tokio::test]
    async fn test_write_failure_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        // A regular file where the data directory should be.
        let blocker = dir.path().join("data");
        tokio::fs::write(&blocker, b"").await.unwrap();

        let result = write_json(&blocker.join("doc.json"), &1).await;
        assert!(matches!(result, Err(StoreError::Io(_))));
    }

    #[tokio::test]
    async fn test_failed_write_leaves_no_temp_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("doc.json");
        // A non-empty directory at the target makes the final step fail.
        tokio::fs::create_dir_all(path.join("occupied")).await.unwrap();

        let result = write_json(&path, &serde_json::json!({ "k": 1 })).await;

        assert!(matches!(result, Err(StoreError::Io(_))));
        assert!(!temp_path(&path).exists());
        assert!(path.join("occupied").is_dir());
    }
}
