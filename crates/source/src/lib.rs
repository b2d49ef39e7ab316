//! Read access to stored inspection submissions.
//!
//! The report pipeline depends only on the [`SubmissionSource`] trait. The
//! backend is chosen by whoever builds the pipeline and handed in
//! explicitly; there is no process-wide client.
//!
//! ## Available Sources
//!
//! - [`InMemorySubmissionSource`]: pre-populated map, or a JSON export file
//! - [`PostgresSubmissionSource`]: the `submissions` table (feature `postgres`)

mod error;
mod memory;
#[cfg(feature = "postgres")]
mod postgres;

pub use error::SourceError;
pub use memory::InMemorySubmissionSource;
#[cfg(feature = "postgres")]
pub use postgres::PostgresSubmissionSource;

use async_trait::async_trait;
use schouw_types::{SubmissionId, SubmissionRecord};

/// Looks up a submission by id.
#[async_trait]
pub trait SubmissionSource: Send + Sync {
    /// Returns `Ok(None)` when no submission has this id. Errors are reserved
    /// for a failing backend.
    async fn fetch(&self, id: &SubmissionId) -> Result<Option<SubmissionRecord>, SourceError>;

    /// Returns a human-readable name for this source (for logging/debugging).
    fn name(&self) -> &'static str;
}
