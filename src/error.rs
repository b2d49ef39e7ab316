use schouw_render_core::RenderError;
use schouw_source::SourceError;
use schouw_storage::StorageError;
use schouw_types::SubmissionId;
use thiserror::Error;

/// Everything that can stop a report from being produced.
#[derive(Error, Debug)]
pub enum ReportError {
    #[error("Submission '{0}' not found")]
    NotFound(SubmissionId),

    #[error("Failed to persist report artifacts: {0}")]
    Persistence(#[from] StorageError),

    #[error("Submission source failed: {0}")]
    Source(#[from] SourceError),

    #[error("Rendering failed: {0}")]
    Render(#[from] RenderError),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Render task failed: {0}")]
    Task(String),
}

impl From<tokio::task::JoinError> for ReportError {
    fn from(e: tokio::task::JoinError) -> Self {
        ReportError::Task(e.to_string())
    }
}
