use crate::helpers::{FONT_BOLD, FONT_REGULAR, PHOTO_XOBJECT, PageCanvas};
use crate::photo::EmbeddedPhoto;
use crate::writer::{DocumentInfo, ReportDocument};
use schouw_layout::text::centered_x;
use schouw_layout::{FlowCursor, HorizontalAlign, PageGeometry, PageSettings, line_height, place_image, wrap_text};
use schouw_render_core::{ArtifactRenderer, RenderError};
use schouw_types::format::COST_PLACEHOLDER;
use schouw_types::{ArtifactKind, FieldFormatter, ReportFields, SubmissionRecord};

pub const DEFAULT_TITLE: &str = "NEN2767 Inspection Report";
pub const PRODUCER: &str = concat!("schouw ", env!("CARGO_PKG_VERSION"));

const TITLE_FONT_SIZE: f32 = 20.0;
const HEADING_FONT_SIZE: f32 = 14.0;
const BODY_FONT_SIZE: f32 = 12.0;

/// One titled block of the report's left column.
#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    pub heading: &'static str,
    pub lines: Vec<String>,
}

impl Section {
    fn new(heading: &'static str, lines: Vec<String>) -> Self {
        Self { heading, lines }
    }
}

/// Lays out the text blocks in reading order. Location Data is left out
/// unless both coordinates are known.
pub fn report_sections(fields: &ReportFields) -> Vec<Section> {
    let mut property = vec![
        format!("Address: {}", fields.address),
        format!("City: {}", fields.city),
        format!("Inspection Date: {}", fields.inspection_date),
    ];
    if let Some(name) = &fields.submitted_by {
        property.push(format!("Reported by: {}", name));
    }

    let mut sections = vec![
        Section::new("Property Information", property),
        Section::new(
            "Condition Assessment",
            vec![
                format!("Structural Defects: {}", fields.structural_defects),
                format!("Decay Magnitude: {}", fields.decay_magnitude),
                format!("Defect Intensity: {}", fields.defect_intensity),
            ],
        ),
        Section::new(
            "Maintenance Assessment",
            vec![
                format!("Maintenance needed: {}", fields.maintenance_label),
                format!("Costs: {}", COST_PLACEHOLDER),
            ],
        ),
        Section::new("Description", vec![fields.description.clone()]),
    ];

    if let Some((latitude, longitude)) = &fields.location {
        sections.push(Section::new(
            "Location Data",
            vec![
                format!("Latitude: {}", latitude),
                format!("Longitude: {}", longitude),
            ],
        ));
    }
    sections
}

/// Renders the NEN2767 inspection report for a single submission.
///
/// The first page carries the title, the photo in the right column and the
/// start of the text column. Text that does not fit continues on further
/// pages at the top margin; the photo is never repeated.
#[derive(Debug, Clone)]
pub struct InspectionPdfRenderer {
    settings: PageSettings,
    formatter: FieldFormatter,
    title: String,
}

impl Default for InspectionPdfRenderer {
    fn default() -> Self {
        Self::new(PageSettings::default(), FieldFormatter::default())
    }
}

impl InspectionPdfRenderer {
    pub fn new(settings: PageSettings, formatter: FieldFormatter) -> Self {
        Self {
            settings,
            formatter,
            title: DEFAULT_TITLE.to_string(),
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn render_document(&self, record: &SubmissionRecord) -> Result<Vec<u8>, RenderError> {
        let geometry = PageGeometry::compute(&self.settings);
        log::debug!(
            "Report geometry: text column {:.2}pt at x={:.2}, photo column {:.2}pt at x={:.2}",
            geometry.text_column_width,
            geometry.left_margin,
            geometry.image_column_width,
            geometry.right_margin
        );

        let mut document = ReportDocument::new(geometry.page_width, geometry.page_height);
        let mut flow = TextFlow::new(&geometry);

        flow.draw_title(&self.title);
        self.draw_photo(record, &geometry, &mut document, flow.first_page());

        let fields = self.formatter.fields(record);
        for section in report_sections(&fields) {
            flow.draw_section(&section);
        }

        for canvas in flow.into_pages() {
            document.add_page(canvas.finish())?;
        }
        log::debug!(
            "Rendered submission {} into {} page(s)",
            record.id,
            document.page_count()
        );

        document.finish(&DocumentInfo {
            title: self.title.clone(),
            subject: format!("Submission {}", record.id),
            producer: PRODUCER.to_string(),
        })
    }

    fn draw_photo(
        &self,
        record: &SubmissionRecord,
        geometry: &PageGeometry,
        document: &mut ReportDocument,
        canvas: &mut PageCanvas,
    ) {
        let embedded = EmbeddedPhoto::from_data_uri(&record.photo_url)
            .and_then(|photo| Ok((photo.intrinsic_size(), photo.to_xobject()?)));

        match embedded {
            Ok((intrinsic, xobject)) => {
                let rect = place_image(intrinsic, geometry.photo_box(), HorizontalAlign::Right);
                document.add_photo(xobject);
                canvas.draw_image(PHOTO_XOBJECT, rect);
            }
            Err(e) => {
                log::warn!("Omitting photo for submission {}: {}", record.id, e);
            }
        }
    }
}

impl ArtifactRenderer for InspectionPdfRenderer {
    fn kind(&self) -> ArtifactKind {
        ArtifactKind::Document
    }

    fn render(&self, submission: &SubmissionRecord) -> Result<Vec<u8>, RenderError> {
        self.render_document(submission)
    }
}

/// The left text column, flowing top-down across as many pages as needed.
struct TextFlow<'a> {
    geometry: &'a PageGeometry,
    cursor: FlowCursor,
    pages: Vec<PageCanvas>,
    started: bool,
}

impl<'a> TextFlow<'a> {
    fn new(geometry: &'a PageGeometry) -> Self {
        let mut cursor = FlowCursor::new(geometry.margin, geometry.bottom_limit());
        cursor.move_to(geometry.content_top);
        Self {
            geometry,
            cursor,
            pages: vec![PageCanvas::new(geometry.page_height)],
            started: false,
        }
    }

    fn first_page(&mut self) -> &mut PageCanvas {
        &mut self.pages[0]
    }

    fn page(&mut self, index: usize) -> &mut PageCanvas {
        while self.pages.len() <= index {
            self.pages.push(PageCanvas::new(self.geometry.page_height));
        }
        &mut self.pages[index]
    }

    fn draw_title(&mut self, title: &str) {
        let g = self.geometry;
        let x = centered_x(title, TITLE_FONT_SIZE, g.left_margin, g.content_width);
        self.pages[0].draw_text(title, FONT_BOLD, TITLE_FONT_SIZE, x, g.margin);
    }

    fn draw_section(&mut self, section: &Section) {
        if self.started {
            self.cursor.skip(line_height(BODY_FONT_SIZE));
        }
        self.started = true;

        self.draw_line(section.heading, FONT_BOLD, HEADING_FONT_SIZE);
        for text in &section.lines {
            for line in wrap_text(text, BODY_FONT_SIZE, self.geometry.text_column_width) {
                self.draw_line(&line, FONT_REGULAR, BODY_FONT_SIZE);
            }
        }
    }

    fn draw_line(&mut self, text: &str, font: &str, font_size: f32) {
        let placement = self.cursor.place_line(line_height(font_size));
        let x = self.geometry.left_margin;
        self.page(placement.page_index)
            .draw_text(text, font, font_size, x, placement.y);
    }

    fn into_pages(self) -> Vec<PageCanvas> {
        self.pages
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use base64::Engine;
    use base64::engine::general_purpose::STANDARD;
    use chrono::{TimeZone, Utc};
    use image::{ImageBuffer, ImageFormat, Rgb};
    use lopdf::Document;
    use lopdf::content::Content;
    use schouw_types::{SubmissionId, SubmissionType};
    use std::io::Cursor;

    fn record() -> SubmissionRecord {
        SubmissionRecord {
            id: SubmissionId::new("sub-42"),
            submission_type: SubmissionType::Tenant,
            street_name: "Main St".to_string(),
            apartment_number: "4B".to_string(),
            city: "Springfield".to_string(),
            inspection_date: Utc.with_ymd_and_hms(2024, 3, 7, 10, 0, 0).unwrap(),
            structural_defects: 4,
            decay_magnitude: 2,
            defect_intensity: 5,
            description: None,
            photo_url: "invalid".to_string(),
            latitude: Some(52.1),
            longitude: Some(5.1),
            submitted_by: None,
        }
    }

    fn png_data_uri() -> String {
        let img: ImageBuffer<Rgb<u8>, Vec<u8>> =
            ImageBuffer::from_fn(8, 4, |x, y| Rgb([(x * 30) as u8, (y * 60) as u8, 90]));
        let mut out = Cursor::new(Vec::new());
        img.write_to(&mut out, ImageFormat::Png).unwrap();
        format!("data:image/png;base64,{}", STANDARD.encode(out.into_inner()))
    }

    /// Text shown on each page, one entry per `Tj`.
    fn page_texts(bytes: &[u8]) -> Vec<Vec<String>> {
        let doc = Document::load_mem(bytes).unwrap();
        doc.get_pages()
            .values()
            .map(|&page_id| {
                let content = Content::decode(&doc.get_page_content(page_id).unwrap()).unwrap();
                content
                    .operations
                    .iter()
                    .filter(|op| op.operator == "Tj")
                    .map(|op| String::from_utf8_lossy(op.operands[0].as_str().unwrap()).into_owned())
                    .collect()
            })
            .collect()
    }

    fn count_image_xobjects(bytes: &[u8]) -> usize {
        let doc = Document::load_mem(bytes).unwrap();
        doc.objects
            .values()
            .filter_map(|obj| obj.as_stream().ok())
            .filter(|stream| {
                stream
                    .dict
                    .get(b"Subtype")
                    .and_then(|s| s.as_name())
                    .map(|name| name == b"Image")
                    .unwrap_or(false)
            })
            .count()
    }

    #[test]
    fn test_sections_in_reading_order() {
        let fields = FieldFormatter::default().fields(&record());
        let headings: Vec<&str> = report_sections(&fields).iter().map(|s| s.heading).collect();
        assert_eq!(
            headings,
            vec![
                "Property Information",
                "Condition Assessment",
                "Maintenance Assessment",
                "Description",
                "Location Data"
            ]
        );
    }

    #[test]
    fn test_reported_by_line() {
        let mut r = record();
        r.submitted_by = Some("J. de Vries".to_string());
        let fields = FieldFormatter::default().fields(&r);
        let sections = report_sections(&fields);
        assert_eq!(sections[0].lines.last().unwrap(), "Reported by: J. de Vries");
    }

    #[test]
    fn test_renders_all_blocks() {
        let _ = env_logger::builder().is_test(true).try_init();
        let bytes = InspectionPdfRenderer::default().render(&record()).unwrap();
        let pages = page_texts(&bytes);
        assert_eq!(pages.len(), 1);

        let text = &pages[0];
        for expected in [
            "NEN2767 Inspection Report",
            "Address: Main St 4B",
            "City: Springfield",
            "Inspection Date: 3/7/2024",
            "Structural Defects: 4/6",
            "Decay Magnitude: 2/6",
            "Defect Intensity: 5/6",
            "Maintenance needed: Yes",
            "Costs: ???",
            "No description provided",
            "Latitude: 52.1",
            "Longitude: 5.1",
        ] {
            assert!(text.iter().any(|t| t == expected), "missing {expected:?} in {text:?}");
        }
    }

    #[test]
    fn test_single_coordinate_omits_location_block() {
        let mut r = record();
        r.longitude = None;
        let bytes = InspectionPdfRenderer::default().render(&r).unwrap();
        let text = page_texts(&bytes).concat();
        assert!(!text.iter().any(|t| t == "Location Data"));
        assert!(!text.iter().any(|t| t.starts_with("Latitude")));
    }

    #[test]
    fn test_custom_title() {
        let renderer = InspectionPdfRenderer::default().with_title("Schouwrapport");
        let bytes = renderer.render(&record()).unwrap();
        assert_eq!(page_texts(&bytes)[0][0], "Schouwrapport");
    }

    #[test]
    fn test_photo_is_embedded() {
        let mut r = record();
        r.photo_url = png_data_uri();
        let bytes = InspectionPdfRenderer::default().render(&r).unwrap();
        assert_eq!(count_image_xobjects(&bytes), 1);
    }

    #[test]
    fn test_malformed_photo_is_omitted() {
        let _ = env_logger::builder().is_test(true).try_init();
        for url in ["no separator here", "data:image/png;base64,!!!", "data:,AAAA"] {
            let mut r = record();
            r.photo_url = url.to_string();
            let bytes = InspectionPdfRenderer::default().render(&r).unwrap();
            assert_eq!(count_image_xobjects(&bytes), 0, "url {url:?}");
            assert!(page_texts(&bytes)[0].iter().any(|t| t == "Costs: ???"));
        }
    }

    #[test]
    fn test_long_description_continues_on_next_page() {
        let mut r = record();
        r.description = Some(vec!["rot"; 1200].join(" "));
        let bytes = InspectionPdfRenderer::default().render(&r).unwrap();
        let pages = page_texts(&bytes);

        assert!(pages.len() >= 2, "expected overflow, got {} page(s)", pages.len());
        assert!(pages[1].iter().all(|t| t != DEFAULT_TITLE));
        assert!(pages.last().unwrap().iter().any(|t| t == "Location Data"));
    }

    #[test]
    fn test_body_text_stays_in_text_column() {
        let mut r = record();
        r.photo_url = png_data_uri();
        r.description = Some(format!(
            "Photo: https://example.org/reports/2024/03/07/main-street-4b/photo-evidence-0001.png {}",
            "b".repeat(150)
        ));
        r.street_name = "Burgemeester-van-Karnebeeklaanwegstraatpad".repeat(2);
        let bytes = InspectionPdfRenderer::default().render(&r).unwrap();

        let g = PageGeometry::compute(&PageSettings::default());
        let column_end = g.left_margin + g.text_column_width;
        let doc = Document::load_mem(&bytes).unwrap();
        let mut checked = 0;
        for page_id in doc.get_pages().into_values() {
            let content = Content::decode(&doc.get_page_content(page_id).unwrap()).unwrap();
            let (mut size, mut x) = (0.0, 0.0);
            for op in &content.operations {
                match op.operator.as_str() {
                    "Tf" => size = op.operands[1].as_float().unwrap(),
                    "Td" => x = op.operands[0].as_float().unwrap(),
                    "Tj" if size < TITLE_FONT_SIZE => {
                        let chars = op.operands[0].as_str().unwrap().len();
                        let right = x + chars as f32 * size * schouw_layout::text::CHAR_WIDTH_FACTOR;
                        assert!(right <= column_end + 0.01, "right edge {right} > {column_end}");
                        checked += 1;
                    }
                    _ => {}
                }
            }
        }
        assert!(checked > 10);
    }

    #[test]
    fn test_typographic_punctuation_survives() {
        let mut r = record();
        r.description = Some("Tenant’s door — “stuck”, €50".to_string());
        let bytes = InspectionPdfRenderer::default().render(&r).unwrap();

        let doc = Document::load_mem(&bytes).unwrap();
        let page_id = *doc.get_pages().values().next().unwrap();
        let content = Content::decode(&doc.get_page_content(page_id).unwrap()).unwrap();
        let shown: Vec<&[u8]> = content
            .operations
            .iter()
            .filter(|op| op.operator == "Tj")
            .map(|op| op.operands[0].as_str().unwrap())
            .collect();
        let expected: &[u8] = b"Tenant\x92s door \x97 \x93stuck\x94, \x8050";
        assert!(shown.contains(&expected), "description not found in {shown:?}");
    }

    #[test]
    fn test_output_is_deterministic() {
        let mut r = record();
        r.photo_url = png_data_uri();
        let renderer = InspectionPdfRenderer::default();
        assert_eq!(renderer.render(&r).unwrap(), renderer.render(&r).unwrap());
    }

    #[test]
    fn test_info_dictionary() {
        let bytes = InspectionPdfRenderer::default().render(&record()).unwrap();
        let doc = Document::load_mem(&bytes).unwrap();
        let info_id = doc.trailer.get(b"Info").unwrap().as_reference().unwrap();
        let info = doc.get_dictionary(info_id).unwrap();
        assert_eq!(info.get(b"Subject").unwrap().as_str().unwrap(), b"Submission sub-42");
        assert_eq!(info.get(b"Title").unwrap().as_str().unwrap(), DEFAULT_TITLE.as_bytes());
    }
}
