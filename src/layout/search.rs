//! Font-size search.
//!
//! Starting from a size proportional to the box height, each candidate size
//! is laid out from scratch and the first one whose block fits the box wins.
//! Sizes are tried in strictly decreasing steps of one; line count is not
//! monotonic in size under every measurer, so there is no bisection.

use super::config::LayoutConfig;
use super::geometry::TextBox;
use super::justify::Justifier;
use super::measure::{FontProvider, TextMeasure};
use super::wrap::{wrap_words, Line};
use tracing::debug;

/// Outcome of fitting text into a box.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutResult {
    /// Accepted font size in pixels
    pub font_size: u32,
    /// Wrapped (and possibly justified) lines, top to bottom
    pub lines: Vec<Line>,
    /// Line heights plus spacing between lines
    pub total_height: f32,
    /// Gap inserted between consecutive lines
    pub spacing: f32,
    /// Top of the first line
    pub y_start: f32,
    /// Candidate sizes evaluated
    pub iterations: u32,
    /// True when the floor size was reached and the block is still too tall
    pub overflow: bool,
    /// The box the block was fitted into
    pub text_box: TextBox,
}

impl LayoutResult {
    /// Top-left drawing origin of every line.
    pub fn line_origins(&self) -> Vec<(f32, f32)> {
        let mut y = self.y_start;
        self.lines
            .iter()
            .map(|line| {
                let origin = (self.text_box.centered_left(line.width), y);
                y += line.height + self.spacing;
                origin
            })
            .collect()
    }
}

/// First candidate size: `round(box_height * initial_size_fraction)`, at least 1.
pub fn initial_font_size(text_box: &TextBox, config: &LayoutConfig) -> u32 {
    ((text_box.height * config.initial_size_fraction).round() as u32).max(1)
}

/// Sum of line heights plus `spacing` between consecutive lines.
pub fn block_height(lines: &[Line], spacing: f32) -> f32 {
    let heights: f32 = lines.iter().map(|l| l.height).sum();
    let gaps = lines.len().saturating_sub(1) as f32;
    heights + gaps * spacing
}

/// Find the largest size (counting down from the initial guess) at which
/// `text` fits `text_box`, then justify and position the lines.
///
/// When the search drops below `min_size` the last computed layout is kept
/// even though it overflows; `overflow` is set instead of failing.
pub fn fit_text<P: FontProvider>(
    text: &str,
    text_box: &TextBox,
    config: &LayoutConfig,
    fonts: &P,
) -> LayoutResult {
    let words: Vec<&str> = text.split_whitespace().collect();
    let floor = config.min_size.max(1);

    let mut size = initial_font_size(text_box, config);
    let mut iterations = 0;

    let (handle, mut lines, spacing, total_height, overflow) = loop {
        let handle = fonts.at_size(size);
        let lines = wrap_words(&words, text_box.width, &handle);
        let spacing = config.line_spacing_fraction * size as f32;
        let total_height = block_height(&lines, spacing);
        iterations += 1;

        debug!(
            font_size = size,
            lines = lines.len(),
            total_height,
            box_height = text_box.height,
            "Tried font size"
        );

        if total_height <= text_box.height {
            break (handle, lines, spacing, total_height, false);
        }
        if size <= floor {
            break (handle, lines, spacing, total_height, true);
        }
        size -= 1;
    };

    if config.justify {
        let justifier = Justifier::new(config.stretch_glyph, config.join_policy);
        justify_lines(&mut lines, text_box.width, &justifier, &handle);
    }

    LayoutResult {
        font_size: size,
        lines,
        total_height,
        spacing,
        y_start: text_box.centered_top(total_height),
        iterations,
        overflow,
        text_box: *text_box,
    }
}

/// Justify every line except the last one of the block.
fn justify_lines<M: TextMeasure>(
    lines: &mut [Line],
    usable_width: f32,
    justifier: &Justifier,
    measure: &M,
) {
    let Some((_, body)) = lines.split_last_mut() else {
        return;
    };

    for line in body {
        if let Some(stretched) = justifier.justify(&line.words, usable_width, measure) {
            let extent = measure.measure(&stretched);
            line.text = stretched;
            line.width = extent.width;
            line.height = extent.height;
        }
    }
}
