//! TrueType font loading, shaping-aware measurement and glyph drawing.
//!
//! Glyph outlines and scaling come from ab_glyph; glyph selection and
//! placement come from [`shape_line`], so right-to-left and cursive scripts
//! are measured exactly as they are drawn.

use super::color::Color;
use super::measure::{FontProvider, TextExtent, TextMeasure};
use super::shaping::{shape_line, ShapedLine};
use crate::compositor::blend::blend_coverage;
use crate::error::StampError;
use ab_glyph::{Font, FontVec, GlyphId, PxScale, ScaleFont};
use image::RgbaImage;
use std::path::{Path, PathBuf};

/// A font file loaded into memory.
pub struct FontFace {
    data: Vec<u8>,
    font: FontVec,
    path: PathBuf,
}

impl std::fmt::Debug for FontFace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FontFace")
            .field("path", &self.path)
            .field("glyphs", &self.font.glyph_count())
            .finish()
    }
}

impl FontFace {
    /// Read and parse a font file.
    pub fn load(path: &Path) -> Result<Self, StampError> {
        let data = std::fs::read(path).map_err(|e| StampError::resource(path, e.to_string()))?;

        if rustybuzz::Face::from_slice(&data, 0).is_none() {
            return Err(StampError::resource(path, "Unsupported font data"));
        }
        let font = FontVec::try_from_vec(data.clone())
            .map_err(|e| StampError::resource(path, e.to_string()))?;

        Ok(Self {
            data,
            font,
            path: path.to_path_buf(),
        })
    }

    /// A handle bound to `size` pixels.
    pub fn handle(&self, size: u32) -> FontHandle<'_> {
        FontHandle {
            // the data was validated by `load`
            shaper: rustybuzz::Face::from_slice(&self.data, 0),
            font: &self.font,
            scale: PxScale::from(size as f32),
            size,
        }
    }
}

impl FontProvider for FontFace {
    type Handle<'a> = FontHandle<'a>;

    fn at_size(&self, size: u32) -> FontHandle<'_> {
        self.handle(size)
    }
}

/// A font bound to one pixel size.
pub struct FontHandle<'a> {
    shaper: Option<rustybuzz::Face<'a>>,
    font: &'a FontVec,
    scale: PxScale,
    size: u32,
}

impl std::fmt::Debug for FontHandle<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FontHandle").field("size", &self.size).finish()
    }
}

impl FontHandle<'_> {
    /// Shape `text` into positioned glyphs at this size.
    pub fn shape(&self, text: &str) -> ShapedLine {
        let Some(face) = &self.shaper else {
            return ShapedLine::default();
        };
        let scaled_font = self.font.as_scaled(self.scale);

        shape_line(
            face,
            text,
            scaled_font.h_scale_factor(),
            scaled_font.v_scale_factor(),
        )
    }

    /// Draw `text` with its line box's top-left corner at (`x`, `top`).
    ///
    /// Glyph coverage is alpha-blended onto `target`; anything outside the
    /// raster is clipped.
    pub fn draw(&self, target: &mut RgbaImage, text: &str, x: f32, top: f32, color: Color) {
        let font = self.font;
        let baseline_y = top + font.as_scaled(self.scale).ascent();
        let rgb = color.channels();

        for shaped in self.shape(text).glyphs {
            let glyph = GlyphId(shaped.glyph_id).with_scale_and_position(
                self.scale,
                ab_glyph::point(x + shaped.x, baseline_y + shaped.y),
            );

            if let Some(outlined) = font.outline_glyph(glyph) {
                let bounds = outlined.px_bounds();
                outlined.draw(|px, py, coverage| {
                    let gx = px as i32 + bounds.min.x as i32;
                    let gy = py as i32 + bounds.min.y as i32;
                    blend_coverage(target, gx, gy, rgb, coverage);
                });
            }
        }
    }
}

impl TextMeasure for FontHandle<'_> {
    /// Shaped advance width by line height (ascent minus descent).
    fn measure(&self, text: &str) -> TextExtent {
        if text.is_empty() {
            return TextExtent::default();
        }

        TextExtent {
            width: self.shape(text).width,
            height: self.font.as_scaled(self.scale).height(),
        }
    }
}
