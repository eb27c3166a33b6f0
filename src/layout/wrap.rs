//! Greedy word wrap.

use super::measure::{TextExtent, TextMeasure};

/// One wrapped row of text at a particular font size.
#[derive(Debug, Clone, PartialEq)]
pub struct Line {
    /// Words in input order
    pub words: Vec<String>,
    /// Text that gets drawn (words joined by spaces, or the justified form)
    pub text: String,
    /// Measured width of `text`
    pub width: f32,
    /// Measured height of `text`
    pub height: f32,
}

impl Line {
    fn new(words: Vec<&str>, extent: TextExtent) -> Self {
        Self {
            text: words.join(" "),
            words: words.into_iter().map(str::to_owned).collect(),
            width: extent.width,
            height: extent.height,
        }
    }

    pub fn is_single_word(&self) -> bool {
        self.words.len() == 1
    }
}

/// Pack `words` left to right into lines no wider than `max_width`.
///
/// A word is appended to the current line while the line, measured as a
/// whole, still fits; otherwise the line is closed and the word starts the
/// next one. Words are never split, so a single word wider than `max_width`
/// becomes its own overflowing line. No lookahead or balancing.
pub fn wrap_words<M: TextMeasure>(words: &[&str], max_width: f32, measure: &M) -> Vec<Line> {
    let mut lines = Vec::new();
    let mut current: Vec<&str> = Vec::new();
    let mut current_extent = TextExtent::default();

    for &word in words {
        if current.is_empty() {
            current.push(word);
            current_extent = measure.measure(word);
            continue;
        }

        let tentative = format!("{} {}", current.join(" "), word);
        let extent = measure.measure(&tentative);

        if extent.width <= max_width {
            current.push(word);
            current_extent = extent;
        } else {
            lines.push(Line::new(std::mem::take(&mut current), current_extent));
            current.push(word);
            current_extent = measure.measure(word);
        }
    }

    if !current.is_empty() {
        lines.push(Line::new(current, current_extent));
    }

    lines
}
