pub struct BreakAnalysis {
    pub should_break: bool,
    pub remaining_height: f32,
}

/// Checks whether a line of `line_height` starting at `cursor_y` still ends
/// above `bottom_limit`.
pub fn check_line_fit(cursor_y: f32, line_height: f32, bottom_limit: f32) -> BreakAnalysis {
    let available = (bottom_limit - cursor_y).max(0.0);
    // Use a small epsilon to handle floating point inaccuracies
    const EPSILON: f32 = 0.01;
    BreakAnalysis {
        should_break: line_height > available + EPSILON,
        remaining_height: available,
    }
}

/// Where a line ended up after pagination.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinePlacement {
    pub page_index: usize,
    pub y: f32,
}

/// A top-down cursor over a single text column that spills onto new pages.
///
/// Each new page restarts at `page_top`; the first page may start lower
/// (below the title) via [`FlowCursor::move_to`].
#[derive(Debug, Clone)]
pub struct FlowCursor {
    page_index: usize,
    y: f32,
    page_top: f32,
    bottom_limit: f32,
}

impl FlowCursor {
    pub fn new(page_top: f32, bottom_limit: f32) -> Self {
        Self {
            page_index: 0,
            y: page_top,
            page_top,
            bottom_limit,
        }
    }

    pub fn page_index(&self) -> usize {
        self.page_index
    }

    pub fn y(&self) -> f32 {
        self.y
    }

    /// Jumps to an absolute y on the current page.
    pub fn move_to(&mut self, y: f32) {
        self.y = y;
    }

    /// Reserves room for one line, breaking to a new page when it would cross
    /// the bottom limit. A line taller than a whole page is placed anyway.
    pub fn place_line(&mut self, line_height: f32) -> LinePlacement {
        let fit = check_line_fit(self.y, line_height, self.bottom_limit);
        if fit.should_break && self.y > self.page_top {
            self.page_index += 1;
            self.y = self.page_top;
            log::debug!("Text flow continues on page {}", self.page_index + 1);
        }
        let placement = LinePlacement {
            page_index: self.page_index,
            y: self.y,
        };
        self.y += line_height;
        placement
    }

    /// Vertical gap without content. Never starts a new page by itself.
    pub fn skip(&mut self, height: f32) {
        self.y += height;
    }
}
