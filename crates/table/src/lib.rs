//! Tabular export of one inspection as CSV.
//!
//! The table always has the same ten columns. Values are taken from the same
//! [`ReportFields`] projection the PDF renderer uses.

use schouw_render_core::{ArtifactRenderer, RenderError};
use schouw_types::format::NOT_AVAILABLE;
use schouw_types::{ArtifactKind, FieldFormatter, ReportFields, SubmissionRecord};

/// Column headers, in output order.
pub const TABLE_COLUMNS: [&str; 10] = [
    "Address",
    "City",
    "Inspection Date",
    "Structural Defects",
    "Decay Magnitude",
    "Defect Intensity",
    "Maintenance Needed",
    "Description",
    "Latitude",
    "Longitude",
];

/// The data row for one submission. Both coordinate cells read `N/A`
/// unless the full pair is known.
pub fn table_row(fields: &ReportFields) -> [String; 10] {
    let (latitude, longitude) = fields
        .location
        .clone()
        .unwrap_or_else(|| (NOT_AVAILABLE.to_string(), NOT_AVAILABLE.to_string()));

    [
        fields.address.clone(),
        fields.city.clone(),
        fields.inspection_date.clone(),
        fields.structural_defects.clone(),
        fields.decay_magnitude.clone(),
        fields.defect_intensity.clone(),
        fields.maintenance_label.to_string(),
        fields.description.clone(),
        latitude,
        longitude,
    ]
}

/// Writes a header row and exactly one data row.
#[derive(Debug, Clone, Default)]
pub struct CsvTableRenderer {
    formatter: FieldFormatter,
}

impl CsvTableRenderer {
    pub fn new(formatter: FieldFormatter) -> Self {
        Self { formatter }
    }

    pub fn render_table(&self, record: &SubmissionRecord) -> Result<Vec<u8>, RenderError> {
        let fields = self.formatter.fields(record);

        let mut wtr = csv::WriterBuilder::new()
            .terminator(csv::Terminator::Any(b'\n'))
            .from_writer(vec![]);
        wtr.write_record(TABLE_COLUMNS).map_err(table_error)?;
        wtr.write_record(table_row(&fields)).map_err(table_error)?;

        let bytes = wtr
            .into_inner()
            .map_err(|e| table_error(e.into_error()))?;
        log::debug!("Rendered table for submission {} ({} bytes)", record.id, bytes.len());
        Ok(bytes)
    }
}

impl ArtifactRenderer for CsvTableRenderer {
    fn kind(&self) -> ArtifactKind {
        ArtifactKind::Table
    }

    fn render(&self, submission: &SubmissionRecord) -> Result<Vec<u8>, RenderError> {
        self.render_table(submission)
    }
}

fn table_error(e: impl std::fmt::Display) -> RenderError {
    RenderError::Table(e.to_string())
}
