use crate::ids::SubmissionId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Lowest value on the NEN2767 severity scales.
pub const SEVERITY_MIN: i32 = 1;
/// Highest value on the NEN2767 severity scales.
pub const SEVERITY_MAX: i32 = 6;

/// Who captured a submission.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubmissionType {
    #[default]
    Tenant,
    Employee,
    Special,
}

impl SubmissionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            SubmissionType::Tenant => "tenant",
            SubmissionType::Employee => "employee",
            SubmissionType::Special => "special",
        }
    }
}

impl fmt::Display for SubmissionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SubmissionType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "tenant" => Ok(SubmissionType::Tenant),
            "employee" => Ok(SubmissionType::Employee),
            "special" => Ok(SubmissionType::Special),
            _ => Err(format!("Invalid submission type: {}", s)),
        }
    }
}

/// One inspection of a building element, as stored by the persistence layer.
///
/// The record is read-only for the whole report pipeline: the accessor hands
/// it out, and the document renderer and table exporter both read the same
/// instance. Field names serialize in camelCase so stored JSON exports of the
/// capture application load without a mapping layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionRecord {
    pub id: SubmissionId,
    #[serde(default, rename = "type")]
    pub submission_type: SubmissionType,
    pub street_name: String,
    pub apartment_number: String,
    pub city: String,
    #[serde(alias = "date")]
    pub inspection_date: DateTime<Utc>,
    pub structural_defects: i32,
    pub decay_magnitude: i32,
    pub defect_intensity: i32,
    #[serde(default)]
    pub description: Option<String>,
    pub photo_url: String,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub submitted_by: Option<String>,
}

impl SubmissionRecord {
    /// The three severity scores in report order.
    pub fn severity_scores(&self) -> [i32; 3] {
        [
            self.structural_defects,
            self.decay_magnitude,
            self.defect_intensity,
        ]
    }

    /// Scores that fall outside the 1..=6 scale. They are still rendered
    /// verbatim; callers use this only to log.
    pub fn out_of_range_scores(&self) -> Vec<i32> {
        self.severity_scores()
            .into_iter()
            .filter(|score| !(SEVERITY_MIN..=SEVERITY_MAX).contains(score))
            .collect()
    }

    /// The coordinate pair, only when both halves are present.
    pub fn location(&self) -> Option<(f64, f64)> {
        self.latitude.zip(self.longitude)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample() -> SubmissionRecord {
        SubmissionRecord {
            id: SubmissionId::new("sub-1"),
            submission_type: SubmissionType::Tenant,
            street_name: "Main St".to_string(),
            apartment_number: "4B".to_string(),
            city: "Springfield".to_string(),
            inspection_date: Utc.with_ymd_and_hms(2024, 3, 7, 10, 30, 0).unwrap(),
            structural_defects: 4,
            decay_magnitude: 2,
            defect_intensity: 5,
            description: None,
            photo_url: "data:image/png;base64,AAAA".to_string(),
            latitude: Some(52.1),
            longitude: Some(5.1),
            submitted_by: None,
        }
    }

    #[test]
    fn test_location_requires_both_coordinates() {
        let mut record = sample();
        assert_eq!(record.location(), Some((52.1, 5.1)));

        record.longitude = None;
        assert_eq!(record.location(), None);

        record.longitude = Some(5.1);
        record.latitude = None;
        assert_eq!(record.location(), None);
    }

    #[test]
    fn test_zero_coordinates_count_as_present() {
        let mut record = sample();
        record.latitude = Some(0.0);
        record.longitude = Some(0.0);
        assert_eq!(record.location(), Some((0.0, 0.0)));
    }

    #[test]
    fn test_out_of_range_scores() {
        let mut record = sample();
        assert!(record.out_of_range_scores().is_empty());

        record.structural_defects = 0;
        record.defect_intensity = 9;
        assert_eq!(record.out_of_range_scores(), vec![0, 9]);
    }

    #[test]
    fn test_deserializes_capture_app_json() {
        let json = r#"{
            "id": "clx9",
            "type": "employee",
            "streetName": "Kerkstraat",
            "apartmentNumber": "12",
            "city": "Utrecht",
            "date": "2024-05-01T08:00:00Z",
            "structuralDefects": 2,
            "decayMagnitude": 3,
            "defectIntensity": 1,
            "description": "Crack in facade",
            "photoUrl": "data:image/jpeg;base64,/9j/",
            "latitude": 52.09,
            "submittedBy": "j.devries"
        }"#;

        let record: SubmissionRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.id.as_str(), "clx9");
        assert_eq!(record.submission_type, SubmissionType::Employee);
        assert_eq!(record.description.as_deref(), Some("Crack in facade"));
        assert_eq!(record.latitude, Some(52.09));
        assert_eq!(record.longitude, None);
        assert_eq!(record.submitted_by.as_deref(), Some("j.devries"));
    }

    #[test]
    fn test_submission_type_round_trips_through_str() {
        for ty in [
            SubmissionType::Tenant,
            SubmissionType::Employee,
            SubmissionType::Special,
        ] {
            assert_eq!(ty.as_str().parse::<SubmissionType>(), Ok(ty));
        }
        assert!("admin".parse::<SubmissionType>().is_err());
    }
}
