use lopdf::content::{Content, Operation};
use lopdf::{Object, StringFormat};
use schouw_layout::Rect;

/// Resource name of the regular body face.
pub const FONT_REGULAR: &str = "F1";
/// Resource name of the bold face used for the title and headings.
pub const FONT_BOLD: &str = "F2";
/// Resource name of the embedded photo.
pub const PHOTO_XOBJECT: &str = "Im1";

/// Distance from the top of a line box to the text baseline, as a fraction
/// of the font size.
const BASELINE_FACTOR: f32 = 0.8;

/// Operations for one page, in layout coordinates (origin top-left).
pub struct PageCanvas {
    page_height: f32,
    content: Content,
}

impl PageCanvas {
    pub fn new(page_height: f32) -> Self {
        Self {
            page_height,
            content: Content { operations: vec![] },
        }
    }

    pub fn finish(self) -> Content {
        self.content
    }

    pub fn is_empty(&self) -> bool {
        self.content.operations.is_empty()
    }

    /// Draws a single line of text whose line box starts at `y`.
    pub fn draw_text(&mut self, text: &str, font: &str, font_size: f32, x: f32, y: f32) {
        if text.trim().is_empty() {
            return;
        }
        let baseline_y = y + font_size * BASELINE_FACTOR;
        let pdf_y = self.page_height - baseline_y;
        let ops = &mut self.content.operations;
        ops.push(Operation::new("BT", vec![]));
        ops.push(Operation::new(
            "Tf",
            vec![Object::Name(font.as_bytes().to_vec()), font_size.into()],
        ));
        ops.push(Operation::new("Td", vec![x.into(), pdf_y.into()]));
        ops.push(Operation::new(
            "Tj",
            vec![Object::String(to_win_ansi(text), StringFormat::Literal)],
        ));
        ops.push(Operation::new("ET", vec![]));
    }

    /// Paints the named image XObject into `rect`.
    pub fn draw_image(&mut self, name: &str, rect: Rect) {
        let pdf_y = self.page_height - rect.bottom();
        let ops = &mut self.content.operations;
        ops.push(Operation::new("q", vec![]));
        ops.push(Operation::new(
            "cm",
            vec![
                rect.width.into(),
                0.into(),
                0.into(),
                rect.height.into(),
                rect.x.into(),
                pdf_y.into(),
            ],
        ));
        ops.push(Operation::new("Do", vec![Object::Name(name.as_bytes().to_vec())]));
        ops.push(Operation::new("Q", vec![]));
    }
}

/// Maps text to WinAnsiEncoding, the single-byte encoding of the standard
/// fonts. Characters the encoding cannot represent become `?`.
pub fn to_win_ansi(s: &str) -> Vec<u8> {
    s.chars().map(win_ansi_byte).collect()
}

fn win_ansi_byte(c: char) -> u8 {
    match c as u32 {
        0x00..=0x7F | 0xA0..=0xFF => c as u8,
        _ => match c {
            '€' => 0x80,
            '‚' => 0x82,
            'ƒ' => 0x83,
            '„' => 0x84,
            '…' => 0x85,
            '†' => 0x86,
            '‡' => 0x87,
            'ˆ' => 0x88,
            '‰' => 0x89,
            'Š' => 0x8A,
            '‹' => 0x8B,
            'Œ' => 0x8C,
            'Ž' => 0x8E,
            '‘' => 0x91,
            '’' => 0x92,
            '“' => 0x93,
            '”' => 0x94,
            '•' => 0x95,
            '–' => 0x96,
            '—' => 0x97,
            '˜' => 0x98,
            '™' => 0x99,
            'š' => 0x9A,
            '›' => 0x9B,
            'œ' => 0x9C,
            'ž' => 0x9E,
            'Ÿ' => 0x9F,
            _ => b'?',
        },
    }
}
