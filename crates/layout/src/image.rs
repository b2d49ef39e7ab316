use schouw_types::{Rect, Size};

/// Horizontal placement of a fitted image inside its box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HorizontalAlign {
    Left,
    Center,
    #[default]
    Right,
}

/// Scales `intrinsic` to the largest size that fits in `bounds` while
/// keeping its aspect ratio. Images smaller than the box are scaled up.
pub fn fit_within(intrinsic: Size, bounds: Size) -> Size {
    if intrinsic.is_empty() || bounds.is_empty() {
        return Size::zero();
    }
    let scale = (bounds.width / intrinsic.width).min(bounds.height / intrinsic.height);
    Size::new(intrinsic.width * scale, intrinsic.height * scale)
}

/// Fits the image into `bounds` and returns the rectangle it occupies.
/// Vertically the image is pinned to the top of the box.
pub fn place_image(intrinsic: Size, bounds: Rect, align: HorizontalAlign) -> Rect {
    let fitted = fit_within(intrinsic, bounds.size());
    let slack = bounds.width - fitted.width;
    let x = match align {
        HorizontalAlign::Left => bounds.x,
        HorizontalAlign::Center => bounds.x + slack / 2.0,
        HorizontalAlign::Right => bounds.x + slack,
    };
    Rect::new(x, bounds.y, fitted.width, fitted.height)
}
