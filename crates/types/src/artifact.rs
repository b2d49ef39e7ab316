use serde::{Deserialize, Serialize};
use std::fmt;

/// The two files produced for every report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArtifactKind {
    /// The paginated inspection report.
    Document,
    /// The single-row tabular export.
    Table,
}

impl ArtifactKind {
    pub fn extension(&self) -> &'static str {
        match self {
            ArtifactKind::Document => "pdf",
            ArtifactKind::Table => "csv",
        }
    }

    pub fn content_type(&self) -> &'static str {
        match self {
            ArtifactKind::Document => "application/pdf",
            ArtifactKind::Table => "text/csv",
        }
    }
}

impl fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArtifactKind::Document => f.write_str("document"),
            ArtifactKind::Table => f.write_str("table"),
        }
    }
}
