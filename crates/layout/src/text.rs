//! Text measurement and line breaking for the built-in Helvetica faces.

/// Average glyph advance as a fraction of the font size.
pub const CHAR_WIDTH_FACTOR: f32 = 0.6;
/// Line height as a multiple of the font size.
pub const LINE_HEIGHT_FACTOR: f32 = 1.2;

/// Measures the width of a text string at the given font size.
/// This is an approximation; the standard 14 fonts carry no metrics here.
pub fn measure_text_width(text: &str, font_size: f32) -> f32 {
    text.chars().count() as f32 * font_size * CHAR_WIDTH_FACTOR
}

pub fn line_height(font_size: f32) -> f32 {
    font_size * LINE_HEIGHT_FACTOR
}

/// Breaks `text` into lines no wider than `max_width`.
///
/// Explicit newlines always start a new line and blank source lines are kept
/// as empty lines. A single word wider than `max_width` is broken between
/// characters so that no line ever leaves the column.
pub fn wrap_text(text: &str, font_size: f32, max_width: f32) -> Vec<String> {
    if max_width <= 0.0 {
        return text.lines().map(|s| s.to_string()).collect();
    }
    let mut lines = Vec::new();
    for paragraph in text.lines() {
        if paragraph.trim().is_empty() {
            lines.push(String::new());
            continue;
        }
        let mut current_line = String::new();
        for word in paragraph.split_whitespace() {
            if measure_text_width(word, font_size) > max_width {
                if !current_line.is_empty() {
                    lines.push(std::mem::take(&mut current_line));
                }
                let mut chunks = split_word(word, font_size, max_width);
                current_line = chunks.pop().unwrap_or_default();
                lines.extend(chunks);
                continue;
            }
            let test_line = if current_line.is_empty() {
                word.to_string()
            } else {
                format!("{} {}", current_line, word)
            };

            if measure_text_width(&test_line, font_size) > max_width && !current_line.is_empty() {
                lines.push(current_line);
                current_line = word.to_string();
            } else {
                current_line = test_line;
            }
        }
        if !current_line.is_empty() {
            lines.push(current_line);
        }
    }
    lines
}

/// Breaks an over-long word into pieces that each fit `max_width`. A piece
/// always holds at least one character.
fn split_word(word: &str, font_size: f32, max_width: f32) -> Vec<String> {
    let mut chunks = Vec::new();
    let mut chunk = String::new();
    for c in word.chars() {
        chunk.push(c);
        if chunk.chars().count() > 1 && measure_text_width(&chunk, font_size) > max_width {
            chunk.pop();
            chunks.push(std::mem::take(&mut chunk));
            chunk.push(c);
        }
    }
    if !chunk.is_empty() {
        chunks.push(chunk);
    }
    chunks
}

/// X position that centers `text` inside `[left, left + width]`.
pub fn centered_x(text: &str, font_size: f32, left: f32, width: f32) -> f32 {
    let text_width = measure_text_width(text, font_size);
    left + ((width - text_width) / 2.0).max(0.0)
}
