//! Persistence for generated report artifacts.
//!
//! - [`ArtifactStore`]: where finished bytes end up
//! - [`FilesystemArtifactStore`]: a directory on the local filesystem
//! - [`ArtifactWriter`]: names and writes the document/table pair

mod error;
mod filesystem;
mod writer;

pub use error::StorageError;
pub use filesystem::FilesystemArtifactStore;
pub use writer::{ArtifactWriter, DEFAULT_FILE_PREFIX, GeneratedArtifacts, artifact_file_name};

use async_trait::async_trait;
use std::path::PathBuf;

/// Storage backend for finished artifacts.
#[async_trait]
pub trait ArtifactStore: Send + Sync {
    /// Writes `bytes` under `file_name` and returns where they were stored.
    async fn persist(&self, file_name: &str, bytes: &[u8]) -> Result<PathBuf, StorageError>;

    /// Reads a previously persisted artifact back.
    async fn load(&self, file_name: &str) -> Result<Vec<u8>, StorageError>;

    /// Returns a human-readable name for this store (for logging/debugging).
    fn name(&self) -> &'static str;
}
