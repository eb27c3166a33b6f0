//! Letter-level justification with stretch glyphs.
//!
//! Instead of widening the spaces between words, slack is distributed by
//! inserting copies of a joining glyph (Arabic tatweel by default) between
//! adjacent letters inside each word. Lines are only ever widened.

use super::config::JoinPolicy;
use super::measure::TextMeasure;

/// Stretch glyph and the rule deciding where it may be inserted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Justifier {
    pub stretch_glyph: char,
    pub policy: JoinPolicy,
}

impl Justifier {
    pub fn new(stretch_glyph: char, policy: JoinPolicy) -> Self {
        Self {
            stretch_glyph,
            policy,
        }
    }

    /// Byte offsets in `word` where stretch glyphs go.
    ///
    /// Each offset is the start of a letter that joins the letter before it;
    /// transparent marks stay attached to their base, so the glyphs land after them.
    fn gaps(&self, word: &str) -> Vec<usize> {
        let mut gaps = Vec::new();
        let mut prev: Option<char> = None;

        for (offset, c) in word.char_indices() {
            if self.policy.is_transparent(c) {
                continue;
            }
            if let Some(p) = prev {
                if self.policy.joins(p, c) {
                    gaps.push(offset);
                }
            }
            prev = Some(c);
        }

        gaps
    }

    /// Number of letter gaps in `word` that accept a stretch glyph.
    pub fn slots(&self, word: &str) -> usize {
        self.gaps(word).len()
    }

    /// Insert `per_slot` stretch glyphs into every joinable gap of `word`.
    pub fn stretch_word(&self, word: &str, per_slot: usize) -> String {
        let gaps = self.gaps(word);
        let mut out = String::with_capacity(
            word.len() + gaps.len() * per_slot * self.stretch_glyph.len_utf8(),
        );

        let mut copied = 0;
        for gap in gaps {
            out.push_str(&word[copied..gap]);
            out.extend(std::iter::repeat(self.stretch_glyph).take(per_slot));
            copied = gap;
        }
        out.push_str(&word[copied..]);

        out
    }

    /// Stretch a line of `words` towards `usable_width`.
    ///
    /// Returns `None` when the line must be drawn unmodified: a single word,
    /// no slack left, no joinable gaps, or a stretch glyph with no width.
    /// The result may miss `usable_width` by up to one glyph width either way.
    pub fn justify<M: TextMeasure>(
        &self,
        words: &[String],
        usable_width: f32,
        measure: &M,
    ) -> Option<String> {
        if words.len() < 2 {
            return None;
        }

        let words_width: f32 = words.iter().map(|w| measure.measure(w).width).sum();
        let slack = usable_width - words_width;
        if slack <= 0.0 {
            return None;
        }

        let extend_slots: usize = words.iter().map(|w| self.slots(w)).sum();
        if extend_slots == 0 {
            return None;
        }

        let glyph_width = measure.measure(self.stretch_glyph.encode_utf8(&mut [0; 4])).width;
        if glyph_width <= 0.0 {
            return None;
        }

        let px_per_slot = slack / extend_slots as f32;
        let glyphs_per_slot = ((px_per_slot / glyph_width).round() as usize).max(1);

        let stretched: Vec<String> = words
            .iter()
            .map(|w| self.stretch_word(w, glyphs_per_slot))
            .collect();

        Some(stretched.join(" "))
    }
}
