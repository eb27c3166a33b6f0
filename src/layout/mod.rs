//! Fitted text layout engine.
//!
//! Places arbitrary text inside a margin-defined box on a template image,
//! choosing the largest font size that fits.
//!
//! # Pipeline
//!
//! 1. Derive the [`TextBox`] from the template size and the margin profile
//! 2. Count down from `round(box_height * initial_size_fraction)`: for each size,
//!    greedy-wrap the words and sum line heights plus spacing
//! 3. Accept the first size whose block fits, or the floor size with an
//!    overflow advisory
//! 4. Optionally stretch-justify every line but the last
//! 5. Center the block vertically and each line horizontally, draw, encode
//!
//! Every measurement goes through bidi reordering and OpenType shaping, so
//! right-to-left lines and joined letter forms are sized as drawn.
//!
//! # Example
//!
//! ```ignore
//! use photostamp::codec::ImageSource;
//! use photostamp::layout::{layout_and_render, LayoutConfig};
//!
//! let config = LayoutConfig::new("fonts/Vazirmatn.ttf").with_justify(true);
//! let render = layout_and_render(ImageSource::Path(template), "متن نمونه", &config)?;
//! std::fs::write(render.image.name, &render.image.data)?;
//! ```

pub mod color;
pub mod config;
pub mod font;
pub mod geometry;
pub mod justify;
pub mod measure;
pub mod render;
pub mod search;
pub mod shaping;
pub mod wrap;

pub use color::{parse_hex_color, Color};
pub use config::{JoinPolicy, LayoutConfig, MarginProfile, TATWEEL};
pub use font::{FontFace, FontHandle};
pub use geometry::TextBox;
pub use justify::Justifier;
pub use measure::{FontProvider, TextExtent, TextMeasure};
pub use render::draw_layout;
pub use search::{fit_text, LayoutResult};
pub use shaping::{ShapedGlyph, ShapedLine};
pub use wrap::{wrap_words, Line};

use crate::codec::{encode_png, EncodedImage, ImageSource, TEXT_RENDER_NAME};
use crate::error::{Advisory, StampError};
use tracing::{info, warn};

/// Diagnostics describing how the text was fitted.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutReport {
    pub font_size: u32,
    pub line_count: usize,
    pub total_height: f32,
    pub box_height: f32,
    pub iterations: u32,
    pub overflow: bool,
    pub advisories: Vec<Advisory>,
}

impl LayoutReport {
    pub fn from_layout(layout: &LayoutResult) -> Self {
        let mut advisories = Vec::new();
        if layout.overflow {
            advisories.push(Advisory::LayoutOverflow {
                font_size: layout.font_size,
                total_height: layout.total_height,
                box_height: layout.text_box.height,
            });
        }

        Self {
            font_size: layout.font_size,
            line_count: layout.lines.len(),
            total_height: layout.total_height,
            box_height: layout.text_box.height,
            iterations: layout.iterations,
            overflow: layout.overflow,
            advisories,
        }
    }
}

/// An encoded text render plus its layout diagnostics.
#[derive(Debug, Clone)]
pub struct TextRender {
    pub image: EncodedImage,
    pub report: LayoutReport,
}

/// Fit `text` onto `template` and encode the result as PNG (`text.png`).
///
/// Overflow at the minimum font size is not an error: the block is drawn
/// as-is and the report carries a [`Advisory::LayoutOverflow`].
pub fn layout_and_render(
    template: ImageSource<'_>,
    text: &str,
    config: &LayoutConfig,
) -> Result<TextRender, StampError> {
    config.validate()?;

    let mut canvas = template.load()?;
    let face = FontFace::load(&config.font_path)?;
    let color = parse_hex_color(&config.fill_color)?;

    let text_box = TextBox::from_canvas(canvas.width(), canvas.height(), &config.margins)?;
    let layout = fit_text(text, &text_box, config, &face);
    let report = LayoutReport::from_layout(&layout);

    for advisory in &report.advisories {
        warn!(%advisory, "Layout advisory");
    }

    draw_layout(&mut canvas, &layout, &face.handle(layout.font_size), color);
    let image = encode_png(&canvas, TEXT_RENDER_NAME)?;

    info!(
        font_size = report.font_size,
        lines = report.line_count,
        iterations = report.iterations,
        overflow = report.overflow,
        bytes = image.len(),
        "Text render encoded"
    );

    Ok(TextRender { image, report })
}
