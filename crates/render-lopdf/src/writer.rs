use crate::helpers::{FONT_BOLD, FONT_REGULAR, PHOTO_XOBJECT};
use lopdf::content::Content;
use lopdf::{Dictionary, Document, Object, ObjectId, Stream, dictionary};
use schouw_render_core::RenderError;
use std::fmt::Display;

/// Document-level metadata written to the Info dictionary.
#[derive(Debug, Clone, Default)]
pub struct DocumentInfo {
    pub title: String,
    pub subject: String,
    pub producer: String,
}

/// Builds the PDF object graph in memory and serializes it in one go.
///
/// All pages share a single resources dictionary holding the two standard
/// fonts and, when present, the photo.
pub struct ReportDocument {
    document: Document,
    pages_id: ObjectId,
    resources_id: ObjectId,
    page_ids: Vec<ObjectId>,
    photo_id: Option<ObjectId>,
    page_width: f32,
    page_height: f32,
}

impl ReportDocument {
    pub fn new(page_width: f32, page_height: f32) -> Self {
        let mut document = Document::with_version("1.7");
        let pages_id = document.new_object_id();
        let resources_id = document.new_object_id();

        Self {
            document,
            pages_id,
            resources_id,
            page_ids: Vec::new(),
            photo_id: None,
            page_width,
            page_height,
        }
    }

    /// Adds the photo XObject. Only one photo is supported per document.
    pub fn add_photo(&mut self, stream: Stream) {
        self.photo_id = Some(self.document.add_object(stream));
    }

    pub fn has_photo(&self) -> bool {
        self.photo_id.is_some()
    }

    /// Appends a page with the given content. Content streams are left
    /// uncompressed.
    pub fn add_page(&mut self, content: Content) -> Result<(), RenderError> {
        let encoded = content.encode().map_err(pdf_error)?;
        let content_id = self
            .document
            .add_object(Stream::new(Dictionary::new(), encoded).with_compression(false));

        let page_dict = dictionary! {
            "Type" => "Page",
            "Parent" => self.pages_id,
            "MediaBox" => vec![0.into(), 0.into(), self.page_width.into(), self.page_height.into()],
            "Contents" => content_id,
            "Resources" => self.resources_id,
        };
        let page_id = self.document.add_object(page_dict);
        self.page_ids.push(page_id);
        Ok(())
    }

    pub fn page_count(&self) -> usize {
        self.page_ids.len()
    }

    /// Writes the shared objects and serializes the whole document.
    pub fn finish(mut self, info: &DocumentInfo) -> Result<Vec<u8>, RenderError> {
        let regular_id = self.document.add_object(standard_font("Helvetica"));
        let bold_id = self.document.add_object(standard_font("Helvetica-Bold"));

        let mut resources = dictionary! {
            "Font" => dictionary! {
                FONT_REGULAR => regular_id,
                FONT_BOLD => bold_id,
            },
        };
        if let Some(photo_id) = self.photo_id {
            resources.set("XObject", dictionary! { PHOTO_XOBJECT => photo_id });
        }
        self.document
            .objects
            .insert(self.resources_id, Object::Dictionary(resources));

        let kids: Vec<Object> = self.page_ids.iter().map(|id| Object::from(*id)).collect();
        let pages_dict = dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => self.page_ids.len() as i32,
        };
        self.document
            .objects
            .insert(self.pages_id, Object::Dictionary(pages_dict));

        let catalog_id = self
            .document
            .add_object(dictionary! { "Type" => "Catalog", "Pages" => self.pages_id });
        self.document.trailer.set("Root", catalog_id);

        let info_id = self.document.add_object(dictionary! {
            "Title" => Object::string_literal(info.title.as_str()),
            "Subject" => Object::string_literal(info.subject.as_str()),
            "Producer" => Object::string_literal(info.producer.as_str()),
        });
        self.document.trailer.set("Info", info_id);

        let mut buffer = Vec::new();
        self.document.save_to(&mut buffer).map_err(pdf_error)?;
        Ok(buffer)
    }
}

fn pdf_error(e: impl Display) -> RenderError {
    RenderError::Pdf(e.to_string())
}

fn standard_font(base_font: &str) -> Dictionary {
    dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => base_font,
        "Encoding" => "WinAnsiEncoding",
    }
}
