//! Drawing a fitted layout onto a template raster.

use super::color::Color;
use super::font::FontHandle;
use super::search::LayoutResult;
use image::RgbaImage;

/// Draw every line of `layout` onto `target` at its centered origin.
pub fn draw_layout(
    target: &mut RgbaImage,
    layout: &LayoutResult,
    font: &FontHandle<'_>,
    color: Color,
) {
    for (line, (x, y)) in layout.lines.iter().zip(layout.line_origins()) {
        font.draw(target, &line.text, x, y, color);
    }
}
