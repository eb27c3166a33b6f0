//! Overlay resampling.
//!
//! Uses fast-image-resize with a Lanczos3 convolution. Alpha is premultiplied
//! before filtering and divided back out afterwards so transparent fringes do
//! not bleed dark colour into visible pixels.

use crate::error::StampError;
use fast_image_resize::{FilterType, Image, MulDiv, PixelType, ResizeAlg, Resizer};
use image::RgbaImage;
use std::num::NonZeroU32;

/// Stretch `src` to exactly `target_w` x `target_h`.
///
/// Each axis is scaled independently; the aspect ratio of `src` is not kept.
pub fn resize_exact(src: &RgbaImage, target_w: u32, target_h: u32) -> Result<RgbaImage, StampError> {
    if src.dimensions() == (target_w, target_h) {
        return Ok(src.clone());
    }

    let src_width = NonZeroU32::new(src.width())
        .ok_or_else(|| StampError::Resize("Source width is 0".to_string()))?;
    let src_height = NonZeroU32::new(src.height())
        .ok_or_else(|| StampError::Resize("Source height is 0".to_string()))?;
    let dst_width = NonZeroU32::new(target_w)
        .ok_or_else(|| StampError::Resize("Target width is 0".to_string()))?;
    let dst_height = NonZeroU32::new(target_h)
        .ok_or_else(|| StampError::Resize("Target height is 0".to_string()))?;

    let mut src_image =
        Image::from_vec_u8(src_width, src_height, src.as_raw().clone(), PixelType::U8x4)
            .map_err(|e| {
                StampError::Resize(format!("Failed to create source image: {:?}", e))
            })?;

    let alpha_mul_div = MulDiv::default();
    alpha_mul_div
        .multiply_alpha_inplace(&mut src_image.view_mut())
        .map_err(|e| StampError::Resize(format!("Failed to premultiply alpha: {:?}", e)))?;

    let mut dst_image = Image::new(dst_width, dst_height, PixelType::U8x4);
    let mut dst_view = dst_image.view_mut();

    let mut resizer = Resizer::new(ResizeAlg::Convolution(FilterType::Lanczos3));
    resizer
        .resize(&src_image.view(), &mut dst_view)
        .map_err(|e| StampError::Resize(format!("Resize operation failed: {:?}", e)))?;

    alpha_mul_div
        .divide_alpha_inplace(&mut dst_view)
        .map_err(|e| StampError::Resize(format!("Failed to restore alpha: {:?}", e)))?;

    RgbaImage::from_raw(target_w, target_h, dst_image.into_vec())
        .ok_or_else(|| StampError::Resize("Failed to create output image buffer".to_string()))
}
