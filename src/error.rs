//! Error and advisory types shared by the compositor and the layout engine.

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Centralized error type for stamping operations.
///
/// Every public operation either returns a complete encoded buffer or one of
/// these variants; no intermediate raster is ever handed back.
#[derive(Error, Debug)]
pub enum StampError {
    /// The caller-supplied image bytes are not a supported raster.
    #[error("Failed to decode image: {0}")]
    Decode(String),

    /// A watermark, template or font file is missing or unreadable.
    #[error("Failed to load resource {}: {message}", path.display())]
    Resource { path: PathBuf, message: String },

    /// The resampling backend rejected the geometry.
    #[error("Resize failed: {0}")]
    Resize(String),

    /// PNG encoding failed.
    #[error("Failed to encode png: {0}")]
    Encode(String),

    /// The configured margins leave no room for text.
    #[error("Text box has no usable area ({width}x{height})")]
    InfeasibleBox { width: f32, height: f32 },

    /// Configuration could not be loaded or failed validation.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl StampError {
    pub fn decode(message: impl Into<String>) -> Self {
        StampError::Decode(message.into())
    }

    pub fn resource(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        StampError::Resource {
            path: path.into(),
            message: message.into(),
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        StampError::Config(message.into())
    }
}

/// Non-fatal conditions reported alongside a successful render.
#[derive(Debug, Clone, PartialEq)]
pub enum Advisory {
    /// The size search reached its floor and the text still exceeds the box.
    /// The block is rendered anyway.
    LayoutOverflow {
        font_size: u32,
        total_height: f32,
        box_height: f32,
    },
}

impl fmt::Display for Advisory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Advisory::LayoutOverflow {
                font_size,
                total_height,
                box_height,
            } => write!(
                f,
                "Text overflows box at minimum font size {}: {:.1}px tall, box is {:.1}px",
                font_size, total_height, box_height
            ),
        }
    }
}
