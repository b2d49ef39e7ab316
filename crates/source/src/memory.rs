use crate::{SourceError, SubmissionSource};
use async_trait::async_trait;
use schouw_types::{SubmissionId, SubmissionRecord};
use std::collections::HashMap;
use std::path::Path;
use std::sync::RwLock;

/// An in-memory submission source.
///
/// Records are stored in memory and must be inserted before use. Used by the
/// CLI's `--records` mode and by tests.
#[derive(Debug, Default)]
pub struct InMemorySubmissionSource {
    records: RwLock<HashMap<SubmissionId, SubmissionRecord>>,
}

impl InMemorySubmissionSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a source from records, keyed by their own id. A later record
    /// with a duplicate id replaces the earlier one.
    pub fn from_records(records: impl IntoIterator<Item = SubmissionRecord>) -> Self {
        let map = records
            .into_iter()
            .map(|record| (record.id.clone(), record))
            .collect();
        Self {
            records: RwLock::new(map),
        }
    }

    /// Loads a JSON array of submissions, as exported by the capture
    /// application.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, SourceError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;
        let records: Vec<SubmissionRecord> = serde_json::from_str(&contents)?;
        log::info!("Loaded {} submission(s) from {}", records.len(), path.display());
        Ok(Self::from_records(records))
    }

    /// Adds or replaces a record.
    ///
    /// # Errors
    ///
    /// Returns `SourceError::LockPoisoned` if the internal lock is poisoned.
    pub fn insert(&self, record: SubmissionRecord) -> Result<(), SourceError> {
        let mut records = self
            .records
            .write()
            .map_err(|_| SourceError::LockPoisoned)?;
        records.insert(record.id.clone(), record);
        Ok(())
    }

    /// Number of stored records.
    ///
    /// # Errors
    ///
    /// Returns `SourceError::LockPoisoned` if the internal lock is poisoned.
    pub fn len(&self) -> Result<usize, SourceError> {
        let records = self
            .records
            .read()
            .map_err(|_| SourceError::LockPoisoned)?;
        Ok(records.len())
    }

    pub fn is_empty(&self) -> Result<bool, SourceError> {
        Ok(self.len()? == 0)
    }
}

#[async_trait]
impl SubmissionSource for InMemorySubmissionSource {
    async fn fetch(&self, id: &SubmissionId) -> Result<Option<SubmissionRecord>, SourceError> {
        let records = self
            .records
            .read()
            .map_err(|_| SourceError::LockPoisoned)?;
        Ok(records.get(id).cloned())
    }

    fn name(&self) -> &'static str {
        "InMemorySubmissionSource"
    }
}
