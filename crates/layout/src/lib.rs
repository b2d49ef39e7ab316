//! Layout for the fixed-format inspection report.
//!
//! Nothing here draws; the module computes where things go:
//! - [`PageGeometry`]: margins and the text/image column split
//! - [`text`]: width approximation and line breaking
//! - [`image`]: aspect-preserving photo fitting
//! - [`FlowCursor`]: top-down text flow with page overflow

pub mod algorithms;
pub mod image;
pub mod page;
pub mod text;

pub use algorithms::pagination::{FlowCursor, LinePlacement};
pub use image::{HorizontalAlign, fit_within, place_image};
pub use page::{PageGeometry, PageSettings};
pub use text::{line_height, measure_text_width, wrap_text};

// Re-export geometry types so renderers do not need the types crate for them
pub use schouw_types::geometry::{Rect, Size};
