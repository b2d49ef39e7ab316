//! PDF renderer for NEN2767 inspection reports, built on lopdf.
//!
//! The document is assembled as an in-memory object graph and serialized
//! once complete, so callers only ever see finished bytes.

mod helpers;
mod photo;
mod renderer;
mod writer;

pub use helpers::{FONT_BOLD, FONT_REGULAR, PHOTO_XOBJECT, PageCanvas, to_win_ansi};
pub use photo::{EmbeddedPhoto, PhotoError, decode_payload};
pub use renderer::{DEFAULT_TITLE, InspectionPdfRenderer, PRODUCER, Section, report_sections};
pub use writer::{DocumentInfo, ReportDocument};
