//! Text measurement seam between the layout algorithms and the font backend.
//!
//! The wrap, search and justification code only ever asks "how big is this
//! string at this size"; anything that can answer that can drive the layout.

/// Pixel extent of a run of text.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TextExtent {
    pub width: f32,
    pub height: f32,
}

/// Measures strings under one fixed font and size.
pub trait TextMeasure {
    fn measure(&self, text: &str) -> TextExtent;
}

/// Produces a fresh measuring handle for each candidate font size.
///
/// Handles may borrow from the provider, so per-font setup is paid once per
/// size rather than once per measurement.
pub trait FontProvider {
    type Handle<'a>: TextMeasure
    where
        Self: 'a;

    fn at_size(&self, size: u32) -> Self::Handle<'_>;
}
