//! Filesystem-backed artifact store.
//!
//! # Security
//!
//! Artifact names are resolved relative to the base directory. Absolute
//! names and names containing `..` are rejected for both reads and writes,
//! so a name taken from a download request can never escape the directory.

use crate::{ArtifactStore, StorageError};
use async_trait::async_trait;
use std::path::{Component, Path, PathBuf};

/// Stores artifacts as files in one directory.
#[derive(Debug, Clone)]
pub struct FilesystemArtifactStore {
    base_path: PathBuf,
}

impl FilesystemArtifactStore {
    /// The directory does not need to exist; it is created on first write.
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }

    pub fn base(&self) -> &Path {
        &self.base_path
    }

    fn resolve_path_safe(&self, file_name: &str) -> Option<PathBuf> {
        let path = Path::new(file_name);
        if file_name.is_empty() || path.is_absolute() {
            return None;
        }
        let only_normal = path
            .components()
            .all(|component| matches!(component, Component::Normal(_)));
        if !only_normal {
            return None;
        }
        Some(self.base_path.join(path))
    }
}

#[async_trait]
impl ArtifactStore for FilesystemArtifactStore {
    async fn persist(&self, file_name: &str, bytes: &[u8]) -> Result<PathBuf, StorageError> {
        let target = self
            .resolve_path_safe(file_name)
            .ok_or_else(|| StorageError::InvalidName(file_name.to_string()))?;

        // Idempotent; the directory may have been removed since the last write.
        tokio::fs::create_dir_all(&self.base_path)
            .await
            .map_err(|source| StorageError::CreateDir {
                path: self.base_path.clone(),
                source,
            })?;

        tokio::fs::write(&target, bytes)
            .await
            .map_err(|source| StorageError::Write {
                file_name: file_name.to_string(),
                source,
            })?;

        log::debug!("Wrote {} bytes to {}", bytes.len(), target.display());
        Ok(target)
    }

    async fn load(&self, file_name: &str) -> Result<Vec<u8>, StorageError> {
        let target = self
            .resolve_path_safe(file_name)
            .ok_or_else(|| StorageError::InvalidName(file_name.to_string()))?;

        tokio::fs::read(&target).await.map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                StorageError::NotFound(file_name.to_string())
            } else {
                StorageError::Io(e)
            }
        })
    }

    fn name(&self) -> &'static str {
        "FilesystemArtifactStore"
    }
}
