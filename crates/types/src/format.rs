//! Field formatting shared by every report artifact.
//!
//! The PDF renderer and the CSV exporter both build a [`ReportFields`] from
//! the same [`FieldFormatter`], so a date, a score or the derived maintenance
//! flag can never be formatted differently in the two files produced for one
//! submission.

use crate::record::{SEVERITY_MAX, SubmissionRecord};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Text used when a submission carries no description.
pub const DESCRIPTION_PLACEHOLDER: &str = "No description provided";
/// Text used for table cells whose value is absent.
pub const NOT_AVAILABLE: &str = "N/A";
/// Cost estimation is not performed; the report always shows this token.
pub const COST_PLACEHOLDER: &str = "???";
/// A score strictly above this value means maintenance is needed.
pub const MAINTENANCE_THRESHOLD: i32 = 3;
/// Month/day/year without padding, the way `en-US` locales print dates.
pub const DEFAULT_DATE_FORMAT: &str = "%-m/%-d/%Y";

/// True if any of the three scores exceeds [`MAINTENANCE_THRESHOLD`].
pub fn maintenance_needed(record: &SubmissionRecord) -> bool {
    record
        .severity_scores()
        .iter()
        .any(|score| *score > MAINTENANCE_THRESHOLD)
}

/// `true` -> "Yes", `false` -> "No".
pub fn yes_no(value: bool) -> &'static str {
    if value { "Yes" } else { "No" }
}

/// Renders a score on the six point scale, e.g. `4/6`. Out-of-range values
/// are printed as they are.
pub fn format_score(score: i32) -> String {
    format!("{}/{}", score, SEVERITY_MAX)
}

/// Street and unit joined by a single space.
pub fn format_address(record: &SubmissionRecord) -> String {
    format!("{} {}", record.street_name, record.apartment_number)
}

/// The description, or [`DESCRIPTION_PLACEHOLDER`] when it is missing or blank.
pub fn description_or_placeholder(description: Option<&str>) -> &str {
    match description {
        Some(text) if !text.trim().is_empty() => text,
        _ => DESCRIPTION_PLACEHOLDER,
    }
}

/// Formats a coordinate with the shortest representation that round-trips.
pub fn format_coordinate(value: f64) -> String {
    value.to_string()
}

/// Formats dates for every artifact of a report run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldFormatter {
    /// A `chrono` strftime pattern.
    pub date_format: String,
}

impl Default for FieldFormatter {
    fn default() -> Self {
        Self {
            date_format: DEFAULT_DATE_FORMAT.to_string(),
        }
    }
}

impl FieldFormatter {
    pub fn new(date_format: impl Into<String>) -> Self {
        Self {
            date_format: date_format.into(),
        }
    }

    pub fn format_date(&self, date: &DateTime<Utc>) -> String {
        date.format(&self.date_format).to_string()
    }

    /// Builds the formatted projection of one record.
    pub fn fields(&self, record: &SubmissionRecord) -> ReportFields {
        let maintenance_needed = maintenance_needed(record);
        ReportFields {
            address: format_address(record),
            city: record.city.clone(),
            inspection_date: self.format_date(&record.inspection_date),
            structural_defects: format_score(record.structural_defects),
            decay_magnitude: format_score(record.decay_magnitude),
            defect_intensity: format_score(record.defect_intensity),
            maintenance_needed,
            maintenance_label: yes_no(maintenance_needed),
            description: description_or_placeholder(record.description.as_deref()).to_string(),
            location: record
                .location()
                .map(|(lat, lon)| (format_coordinate(lat), format_coordinate(lon))),
            submitted_by: record.submitted_by.clone(),
        }
    }
}

/// Every user-visible value of a report, already formatted.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportFields {
    pub address: String,
    pub city: String,
    pub inspection_date: String,
    pub structural_defects: String,
    pub decay_magnitude: String,
    pub defect_intensity: String,
    pub maintenance_needed: bool,
    pub maintenance_label: &'static str,
    pub description: String,
    /// Formatted `(latitude, longitude)`, present only as a pair.
    pub location: Option<(String, String)>,
    pub submitted_by: Option<String>,
}
