//! Bidi reordering and OpenType shaping of a single line.
//!
//! A line is split into directional runs with the Unicode bidi algorithm,
//! the runs are put in visual (left to right) order and each run is shaped
//! with rustybuzz. Shaping picks contextual letter forms, ligatures and
//! GPOS/kern adjustments, so the pen positions returned here are the ones
//! both measurement and drawing use.

use rustybuzz::{Direction, Face, UnicodeBuffer};
use std::ops::Range;
use unicode_bidi::BidiInfo;

/// One glyph placed on the line, relative to the line origin and baseline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShapedGlyph {
    pub glyph_id: u16,
    /// Pen position plus the shaper's offset, in pixels from the line start
    pub x: f32,
    /// Vertical offset in pixels, positive downwards
    pub y: f32,
    /// Byte offset of the source cluster in the line text
    pub cluster: usize,
}

/// A fully shaped line in visual order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ShapedLine {
    pub glyphs: Vec<ShapedGlyph>,
    /// Total advance in pixels
    pub width: f32,
}

/// Directional runs of `text` in visual order, each flagged right-to-left or not.
pub fn visual_runs(text: &str) -> Vec<(Range<usize>, bool)> {
    let bidi = BidiInfo::new(text, None);
    let mut runs = Vec::new();

    for para in &bidi.paragraphs {
        let (levels, level_runs) = bidi.visual_runs(para, para.range.clone());
        for run in level_runs {
            let rtl = levels[run.start].is_rtl();
            runs.push((run, rtl));
        }
    }

    runs
}

/// Shape `text` with `face`.
///
/// `h_factor` and `v_factor` convert font units to pixels.
pub fn shape_line(face: &Face<'_>, text: &str, h_factor: f32, v_factor: f32) -> ShapedLine {
    let mut line = ShapedLine::default();
    if text.is_empty() {
        return line;
    }

    let mut pen_x = 0.0f32;
    for (run, rtl) in visual_runs(text) {
        let mut buffer = UnicodeBuffer::new();
        buffer.push_str(&text[run.clone()]);
        buffer.set_direction(if rtl {
            Direction::RightToLeft
        } else {
            Direction::LeftToRight
        });
        buffer.guess_segment_properties();

        let shaped = rustybuzz::shape(face, &[], buffer);
        for (info, pos) in shaped.glyph_infos().iter().zip(shaped.glyph_positions()) {
            line.glyphs.push(ShapedGlyph {
                glyph_id: info.glyph_id as u16,
                x: pen_x + pos.x_offset as f32 * h_factor,
                y: -(pos.y_offset as f32) * v_factor,
                cluster: run.start + info.cluster as usize,
            });
            pen_x += pos.x_advance as f32 * h_factor;
        }
    }

    line.width = pen_x;
    line
}
