//! Foundation types for NEN2767 inspection reports.
//!
//! - [`SubmissionRecord`]: the immutable input of every report
//! - [`format`]: the one place report values are formatted
//! - [`ArtifactKind`]: the document/table pair a report consists of
//! - [`Rect`] / [`Size`]: layout primitives

pub mod artifact;
pub mod format;
pub mod geometry;
pub mod ids;
pub mod record;

pub use artifact::ArtifactKind;
pub use format::{FieldFormatter, ReportFields};
pub use geometry::{Rect, Size};
pub use ids::SubmissionId;
pub use record::{SEVERITY_MAX, SEVERITY_MIN, SubmissionRecord, SubmissionType};
