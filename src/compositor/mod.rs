//! Watermark compositor.
//!
//! Stretches a watermark to the exact geometry of a photo and alpha-blends it
//! on top.
//!
//! # Pipeline
//!
//! 1. Decode the photo bytes (any supported raster format) to RGBA
//! 2. Load the watermark file to RGBA
//! 3. Resize the watermark to the photo's width and height (Lanczos3, aspect ratio not kept)
//! 4. Blend the watermark over the photo
//! 5. Encode the result as PNG (`result.png`)
//!
//! # Example
//!
//! ```ignore
//! use photostamp::compositor::composite;
//!
//! let photo = std::fs::read("photo.jpg")?;
//! let output = composite(&photo, Path::new("watermark.png"))?;
//! std::fs::write(output.name, &output.data)?;
//! ```

pub mod blend;
pub mod resize;

pub use blend::{blend_over, blend_pixels};
pub use resize::resize_exact;

use crate::codec::{decode_rgba, encode_png, load_rgba, EncodedImage, COMPOSITE_NAME};
use crate::error::StampError;
use image::RgbaImage;
use std::path::Path;
use tracing::{debug, info};

/// Overlay the watermark at `overlay_path` onto the photo in `base_bytes`.
///
/// The output always has the photo's dimensions.
pub fn composite(base_bytes: &[u8], overlay_path: &Path) -> Result<EncodedImage, StampError> {
    let base = decode_rgba(base_bytes)?;
    let overlay = load_rgba(overlay_path)?;

    debug!(
        base_width = base.width(),
        base_height = base.height(),
        overlay_width = overlay.width(),
        overlay_height = overlay.height(),
        overlay = %overlay_path.display(),
        "Compositing watermark"
    );

    let combined = composite_rgba(base, &overlay)?;
    let encoded = encode_png(&combined, COMPOSITE_NAME)?;

    info!(
        width = combined.width(),
        height = combined.height(),
        bytes = encoded.len(),
        "Watermark composite encoded"
    );

    Ok(encoded)
}

/// Stretch `overlay` to `base` and blend it on top, returning the new raster.
pub fn composite_rgba(mut base: RgbaImage, overlay: &RgbaImage) -> Result<RgbaImage, StampError> {
    let (width, height) = base.dimensions();
    let resized = resize_exact(overlay, width, height)?;
    blend_over(&mut base, &resized);
    Ok(base)
}
