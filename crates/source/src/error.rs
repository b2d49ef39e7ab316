use schouw_types::SubmissionId;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SourceError {
    #[cfg(feature = "postgres")]
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Submission '{id}' could not be decoded: {message}")]
    Decode { id: SubmissionId, message: String },

    #[error("Failed to parse submission records: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("submission store lock poisoned")]
    LockPoisoned,
}
