//! The fixed two-column page geometry of an inspection report.
//!
//! The left column carries the narrative text, the right column the photo.
//! Both are derived from the page width once per document so text wrapping
//! and image placement line up on every page.

use schouw_types::Rect;
use serde::Deserialize;

/// A4 width in points.
pub const A4_WIDTH: f32 = 595.28;
/// A4 height in points.
pub const A4_HEIGHT: f32 = 841.89;

/// Configurable page proportions. Every field has a default, so a partial
/// `[page]` table in the configuration file is enough.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct PageSettings {
    pub width: f32,
    pub height: f32,
    /// Outer margin, applied on all four sides.
    pub margin: f32,
    /// Horizontal space between the text and the image column.
    pub gutter: f32,
    /// Share of the content width given to the text column.
    pub text_ratio: f32,
    /// Y position where the photo and the first text block start.
    pub content_top: f32,
    /// Upper bound for the rendered photo height.
    pub photo_max_height: f32,
}

impl Default for PageSettings {
    fn default() -> Self {
        Self {
            width: A4_WIDTH,
            height: A4_HEIGHT,
            margin: 50.0,
            gutter: 20.0,
            text_ratio: 0.6,
            content_top: 120.0,
            photo_max_height: 300.0,
        }
    }
}

/// Derived geometry, in layout units with the origin at the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageGeometry {
    pub page_width: f32,
    pub page_height: f32,
    pub margin: f32,
    pub content_width: f32,
    pub text_column_width: f32,
    pub image_column_width: f32,
    pub left_margin: f32,
    pub right_margin: f32,
    pub content_top: f32,
    pub photo_max_height: f32,
}

impl PageGeometry {
    pub fn compute(settings: &PageSettings) -> Self {
        let content_width = settings.width - 2.0 * settings.margin;
        let text_column_width = content_width * settings.text_ratio;
        let image_column_width = content_width * (1.0 - settings.text_ratio);
        let left_margin = settings.margin;
        let right_margin = left_margin + text_column_width + settings.gutter;

        Self {
            page_width: settings.width,
            page_height: settings.height,
            margin: settings.margin,
            content_width,
            text_column_width,
            image_column_width,
            left_margin,
            right_margin,
            content_top: settings.content_top,
            photo_max_height: settings.photo_max_height,
        }
    }

    /// The area text may occupy on the first page, from `content_top` down.
    pub fn text_column(&self) -> Rect {
        Rect::new(
            self.left_margin,
            self.content_top,
            self.text_column_width,
            self.bottom_limit() - self.content_top,
        )
    }

    /// The box the photo is fitted into.
    pub fn photo_box(&self) -> Rect {
        Rect::new(
            self.right_margin,
            self.content_top,
            self.image_column_width,
            self.photo_max_height,
        )
    }

    /// Lowest y a line of text may reach.
    pub fn bottom_limit(&self) -> f32 {
        self.page_height - self.margin
    }
}
