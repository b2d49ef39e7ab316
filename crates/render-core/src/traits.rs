use crate::error::RenderError;
use schouw_types::{ArtifactKind, SubmissionRecord};

/// Turns one submission into the complete bytes of one artifact.
///
/// Implementations hold their own formatting and layout settings and must
/// not keep any reference to the record after `render` returns. The returned
/// buffer is final; there is no incremental output.
pub trait ArtifactRenderer: Send + Sync {
    /// Which of the report's two files this renderer produces.
    fn kind(&self) -> ArtifactKind;

    fn render(&self, submission: &SubmissionRecord) -> Result<Vec<u8>, RenderError>;
}
