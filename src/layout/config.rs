//! Text layout configuration types.
//!
//! This module defines how fitted text is placed on a template:
//! - Font file and size search bounds
//! - Margin profile (offset box or symmetric inset)
//! - Line spacing
//! - Stretch-glyph justification settings
//! - Fill colour

use super::color::parse_hex_color;
use crate::error::StampError;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use unicode_joining_type::{get_joining_type, JoiningType};

/// Arabic tatweel (kashida), the default stretch glyph.
pub const TATWEEL: char = '\u{0640}';

// Default values
fn default_initial_size_fraction() -> f32 {
    0.08
}

fn default_min_size() -> u32 {
    10
}

fn default_line_spacing_fraction() -> f32 {
    0.2
}

fn default_stretch_glyph() -> char {
    TATWEEL
}

fn default_fill_color() -> String {
    "#FFFFFF".to_string()
}

fn default_horizontal_margin() -> f32 {
    0.08
}

fn default_top_margin() -> f32 {
    0.2
}

fn default_bottom_margin() -> f32 {
    0.1
}

fn default_symmetric_margin() -> f32 {
    0.05
}

/// How the text box is carved out of the template.
///
/// Uses serde tag to distinguish between profiles in YAML:
/// ```yaml
/// margins:
///   profile: boxed
///   horizontal: 0.08
///   top: 0.2
///   bottom: 0.1
/// ```
/// or
/// ```yaml
/// margins:
///   profile: symmetric
///   margin: 0.05
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "profile", rename_all = "lowercase", deny_unknown_fields)]
pub enum MarginProfile {
    /// Independent horizontal, top and bottom fractions of the canvas.
    Boxed {
        #[serde(default = "default_horizontal_margin")]
        horizontal: f32,
        #[serde(default = "default_top_margin")]
        top: f32,
        #[serde(default = "default_bottom_margin")]
        bottom: f32,
    },
    /// The same fraction on every edge; the block ends up centered on the canvas.
    Symmetric {
        #[serde(default = "default_symmetric_margin")]
        margin: f32,
    },
}

impl Default for MarginProfile {
    fn default() -> Self {
        MarginProfile::Boxed {
            horizontal: default_horizontal_margin(),
            top: default_top_margin(),
            bottom: default_bottom_margin(),
        }
    }
}

impl MarginProfile {
    /// Returns (horizontal, top, bottom) fractions.
    pub fn fractions(&self) -> (f32, f32, f32) {
        match *self {
            MarginProfile::Boxed {
                horizontal,
                top,
                bottom,
            } => (horizontal, top, bottom),
            MarginProfile::Symmetric { margin } => (margin, margin, margin),
        }
    }

    pub fn validate(&self) -> Result<(), StampError> {
        let (horizontal, top, bottom) = self.fractions();
        for (name, value) in [("horizontal", horizontal), ("top", top), ("bottom", bottom)] {
            if !(0.0..1.0).contains(&value) {
                return Err(StampError::config(format!(
                    "{} margin must be in [0, 1), got {}",
                    name, value
                )));
            }
        }
        if horizontal * 2.0 >= 1.0 {
            return Err(StampError::config(format!(
                "horizontal margin {} leaves no width for text",
                horizontal
            )));
        }
        if top + bottom >= 1.0 {
            return Err(StampError::config(format!(
                "top ({}) and bottom ({}) margins leave no height for text",
                top, bottom
            )));
        }
        Ok(())
    }
}

/// Which adjacent letter pairs may receive stretch glyphs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JoinPolicy {
    /// Every pair of adjacent characters inside a word, regardless of script.
    #[default]
    Always,
    /// Only cursively joined pairs, by Unicode joining type: the first letter
    /// must connect forward and the second backward. Combining marks are
    /// skipped over.
    Arabic,
}

impl JoinPolicy {
    /// Whether a stretch glyph may be placed between `prev` and `next`.
    pub fn joins(&self, prev: char, next: char) -> bool {
        match self {
            JoinPolicy::Always => true,
            JoinPolicy::Arabic => joins_forward(prev) && joins_backward(next),
        }
    }

    /// Characters that ride on the preceding letter and never take a gap of their own.
    pub fn is_transparent(&self, c: char) -> bool {
        match self {
            JoinPolicy::Always => false,
            JoinPolicy::Arabic => matches!(get_joining_type(c), JoiningType::Transparent),
        }
    }
}

fn joins_forward(c: char) -> bool {
    matches!(
        get_joining_type(c),
        JoiningType::DualJoining | JoiningType::LeftJoining | JoiningType::JoinCausing
    )
}

fn joins_backward(c: char) -> bool {
    matches!(
        get_joining_type(c),
        JoiningType::DualJoining | JoiningType::RightJoining | JoiningType::JoinCausing
    )
}

/// Text layout configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutConfig {
    /// TrueType/OpenType font used for measuring and drawing
    pub font_path: PathBuf,

    /// First font-size guess as a fraction of the text box height (default: 0.08)
    #[serde(default = "default_initial_size_fraction")]
    pub initial_size_fraction: f32,

    /// Smallest font size the search will try (default: 10)
    #[serde(default = "default_min_size")]
    pub min_size: u32,

    /// Text box profile (default: boxed 0.08 / 0.2 / 0.1)
    #[serde(default)]
    pub margins: MarginProfile,

    /// Gap between lines as a fraction of font size (default: 0.2)
    #[serde(default = "default_line_spacing_fraction")]
    pub line_spacing_fraction: f32,

    /// Stretch non-final lines to the box width (default: false)
    #[serde(default)]
    pub justify: bool,

    /// Glyph inserted between letters when justifying (default: U+0640)
    #[serde(default = "default_stretch_glyph")]
    pub stretch_glyph: char,

    /// Which letter pairs accept stretch glyphs (default: always)
    #[serde(default)]
    pub join_policy: JoinPolicy,

    /// Text colour as hex string (default: "#FFFFFF")
    #[serde(default = "default_fill_color")]
    pub fill_color: String,
}

impl LayoutConfig {
    /// Configuration with every option at its default.
    pub fn new(font_path: impl Into<PathBuf>) -> Self {
        Self {
            font_path: font_path.into(),
            initial_size_fraction: default_initial_size_fraction(),
            min_size: default_min_size(),
            margins: MarginProfile::default(),
            line_spacing_fraction: default_line_spacing_fraction(),
            justify: false,
            stretch_glyph: default_stretch_glyph(),
            join_policy: JoinPolicy::default(),
            fill_color: default_fill_color(),
        }
    }

    pub fn with_margins(mut self, margins: MarginProfile) -> Self {
        self.margins = margins;
        self
    }

    pub fn with_justify(mut self, justify: bool) -> Self {
        self.justify = justify;
        self
    }

    pub fn validate(&self) -> Result<(), StampError> {
        if !(self.initial_size_fraction > 0.0 && self.initial_size_fraction <= 1.0) {
            return Err(StampError::config(format!(
                "initial_size_fraction must be in (0, 1], got {}",
                self.initial_size_fraction
            )));
        }
        if self.min_size == 0 {
            return Err(StampError::config("min_size must be at least 1"));
        }
        if !(self.line_spacing_fraction >= 0.0 && self.line_spacing_fraction.is_finite()) {
            return Err(StampError::config(format!(
                "line_spacing_fraction must be non-negative, got {}",
                self.line_spacing_fraction
            )));
        }
        if self.stretch_glyph.is_whitespace() {
            return Err(StampError::config("stretch_glyph cannot be whitespace"));
        }
        self.margins.validate()?;
        parse_hex_color(&self.fill_color)?;
        Ok(())
    }
}
