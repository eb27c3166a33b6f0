//! Text box geometry.

use super::config::MarginProfile;
use crate::error::StampError;

/// The rectangle text is fitted into, in canvas pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextBox {
    pub left: f32,
    pub top: f32,
    /// Usable width for a line of text
    pub width: f32,
    pub height: f32,
}

impl TextBox {
    /// Build a box, rejecting zero or negative area.
    pub fn new(left: f32, top: f32, width: f32, height: f32) -> Result<Self, StampError> {
        if !(width > 0.0 && height > 0.0) {
            return Err(StampError::InfeasibleBox { width, height });
        }
        Ok(Self {
            left,
            top,
            width,
            height,
        })
    }

    /// Derive the box for a `canvas_width` x `canvas_height` template.
    ///
    /// Both profiles inset the canvas by fractions of its own dimensions. With
    /// the symmetric profile the top and bottom insets match, so centering in
    /// the box is the same as centering on the whole canvas.
    pub fn from_canvas(
        canvas_width: u32,
        canvas_height: u32,
        margins: &MarginProfile,
    ) -> Result<Self, StampError> {
        let (horizontal, top, bottom) = margins.fractions();
        let w = canvas_width as f32;
        let h = canvas_height as f32;

        let left = w * horizontal;
        let top_px = h * top;
        let bottom_px = h * bottom;

        Self::new(left, top_px, w - 2.0 * left, h - top_px - bottom_px)
    }

    pub fn bottom(&self) -> f32 {
        self.top + self.height
    }

    /// Top edge of a block of `block_height` centered vertically in the box.
    pub fn centered_top(&self, block_height: f32) -> f32 {
        self.top + (self.height - block_height) / 2.0
    }

    /// Left edge of a line of `line_width` centered horizontally in the box.
    pub fn centered_left(&self, line_width: f32) -> f32 {
        self.left + (self.width - line_width) / 2.0
    }
}
