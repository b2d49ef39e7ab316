use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use chrono::{TimeZone, Utc};
use image::{ImageBuffer, ImageFormat, Rgb};
use schouw::types::SubmissionType;
use schouw::{SubmissionId, SubmissionRecord};
use std::io::Cursor;

/// The Main St 4B submission: high scores, both coordinates, no description.
pub fn main_street() -> SubmissionRecord {
    SubmissionRecord {
        id: SubmissionId::new("sub-main-st"),
        submission_type: SubmissionType::Tenant,
        street_name: "Main St".to_string(),
        apartment_number: "4B".to_string(),
        city: "Springfield".to_string(),
        inspection_date: Utc.with_ymd_and_hms(2024, 3, 7, 10, 30, 0).unwrap(),
        structural_defects: 4,
        decay_magnitude: 2,
        defect_intensity: 5,
        description: None,
        photo_url: png_data_uri(16, 12),
        latitude: Some(52.1),
        longitude: Some(5.1),
        submitted_by: None,
    }
}

/// All scores at or below the maintenance threshold.
pub fn low_scores() -> SubmissionRecord {
    SubmissionRecord {
        id: SubmissionId::new("sub-low"),
        submission_type: SubmissionType::Employee,
        street_name: "Kerkstraat".to_string(),
        apartment_number: "12".to_string(),
        city: "Utrecht".to_string(),
        inspection_date: Utc.with_ymd_and_hms(2024, 11, 21, 8, 0, 0).unwrap(),
        structural_defects: 1,
        decay_magnitude: 2,
        defect_intensity: 1,
        description: Some("Minor paint damage near the door".to_string()),
        photo_url: png_data_uri(8, 8),
        latitude: None,
        longitude: None,
        submitted_by: Some("j.devries".to_string()),
    }
}

/// A solid-ish RGB PNG wrapped in a data URI.
pub fn png_data_uri(width: u32, height: u32) -> String {
    let img: ImageBuffer<Rgb<u8>, Vec<u8>> =
        ImageBuffer::from_fn(width, height, |x, y| Rgb([(x * 13) as u8, (y * 17) as u8, 128]));
    let mut out = Cursor::new(Vec::new());
    img.write_to(&mut out, ImageFormat::Png)
        .expect("encoding a PNG in memory cannot fail");
    format!("data:image/png;base64,{}", STANDARD.encode(out.into_inner()))
}
