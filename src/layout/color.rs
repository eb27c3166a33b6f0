//! Fill colour parsing.

use crate::error::StampError;

/// RGB fill colour for rendered text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub fn white() -> Self {
        Self::new(255, 255, 255)
    }

    pub fn channels(&self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::white()
    }
}

/// Parse a hex color string into RGB components.
///
/// Supports both #RGB and #RRGGBB formats.
pub fn parse_hex_color(hex: &str) -> Result<Color, StampError> {
    let digits = hex
        .strip_prefix('#')
        .ok_or_else(|| StampError::config(format!("Color '{}' must start with '#'", hex)))?;

    if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(StampError::config(format!("Invalid hex digit in '{}'", hex)));
    }

    let component = |s: &str| {
        u8::from_str_radix(s, 16)
            .map_err(|_| StampError::config(format!("Invalid hex digit in '{}'", hex)))
    };

    match digits.len() {
        // Double each component: 0xF -> 0xFF, 0xA -> 0xAA
        3 => Ok(Color::new(
            component(&digits[0..1])? * 17,
            component(&digits[1..2])? * 17,
            component(&digits[2..3])? * 17,
        )),
        6 => Ok(Color::new(
            component(&digits[0..2])?,
            component(&digits[2..4])?,
            component(&digits[4..6])?,
        )),
        n => Err(StampError::config(format!(
            "Color must be #RGB or #RRGGBB format, got {} characters",
            n
        ))),
    }
}
