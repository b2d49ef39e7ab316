//! NEN2767 inspection report generation.
//!
//! Given a submission id, [`ReportGenerator::generate_report`] loads the
//! stored inspection, renders a paginated PDF report and a single-row CSV
//! export from the same record, and writes both into the output directory
//! under one generated base name.
//!
//! ```ignore
//! use schouw::{ReportConfig, ReportGenerator};
//! use schouw::source::InMemorySubmissionSource;
//! use std::sync::Arc;
//!
//! let source = Arc::new(InMemorySubmissionSource::from_json_file("records.json")?);
//! let generator = ReportGenerator::new(source, &ReportConfig::load(None)?);
//! let names = generator.generate_report(&"clx9".into()).await?;
//! println!("{} / {}", names.document_file_name, names.table_file_name);
//! ```

pub mod config;
pub mod error;
pub mod generator;

pub use config::ReportConfig;
pub use error::ReportError;
pub use generator::ReportGenerator;

pub use schouw_storage::GeneratedArtifacts;
pub use schouw_types::{SubmissionId, SubmissionRecord};

// Component crates, for callers that assemble their own pipeline
pub use schouw_layout as layout;
pub use schouw_render_core as render;
pub use schouw_render_lopdf as pdf;
pub use schouw_source as source;
pub use schouw_storage as storage;
pub use schouw_table as table;
pub use schouw_types as types;
