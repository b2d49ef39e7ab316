use crate::{ArtifactStore, StorageError};
use schouw_types::ArtifactKind;
use serde::Serialize;
use std::sync::Arc;
use uuid::Uuid;

pub const DEFAULT_FILE_PREFIX: &str = "NEN2767-Report";

/// The generated names of one report run, relative to the output directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedArtifacts {
    pub document_file_name: String,
    pub table_file_name: String,
}

/// `<prefix>-<base>.<ext>`
pub fn artifact_file_name(prefix: &str, base: &Uuid, kind: ArtifactKind) -> String {
    format!("{}-{}.{}", prefix, base, kind.extension())
}

/// Persists the document and table of one report under a shared, freshly
/// generated base name.
#[derive(Clone)]
pub struct ArtifactWriter {
    store: Arc<dyn ArtifactStore>,
    prefix: String,
}

impl ArtifactWriter {
    pub fn new(store: Arc<dyn ArtifactStore>) -> Self {
        Self {
            store,
            prefix: DEFAULT_FILE_PREFIX.to_string(),
        }
    }

    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    pub fn store(&self) -> &Arc<dyn ArtifactStore> {
        &self.store
    }

    /// Writes the document first, then the table.
    ///
    /// Either failure fails the whole call. A document written before the
    /// table write failed stays on disk and is logged as orphaned.
    pub async fn write_pair(
        &self,
        document: &[u8],
        table: &[u8],
    ) -> Result<GeneratedArtifacts, StorageError> {
        let base = Uuid::new_v4();
        let document_file_name = artifact_file_name(&self.prefix, &base, ArtifactKind::Document);
        let table_file_name = artifact_file_name(&self.prefix, &base, ArtifactKind::Table);

        self.persist(ArtifactKind::Document, &document_file_name, document)
            .await?;

        if let Err(e) = self
            .persist(ArtifactKind::Table, &table_file_name, table)
            .await
        {
            log::warn!(
                "Table write failed; document {} in {} is orphaned",
                document_file_name,
                self.store.name()
            );
            return Err(e);
        }

        Ok(GeneratedArtifacts {
            document_file_name,
            table_file_name,
        })
    }

    async fn persist(
        &self,
        kind: ArtifactKind,
        file_name: &str,
        bytes: &[u8],
    ) -> Result<(), StorageError> {
        let path = self.store.persist(file_name, bytes).await?;
        log::debug!("Stored {} ({}) at {}", kind, kind.content_type(), path.display());
        Ok(())
    }
}
