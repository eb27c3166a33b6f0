//! Per-pixel alpha blending.

use image::{Rgba, RgbaImage};

/// Blend two pixels with the Porter-Duff "over" operator, `foreground` on top.
///
/// Over an opaque background this reduces to
/// `out = bg * (1 - fg.a) + fg * fg.a` per colour channel.
pub fn blend_pixels(background: Rgba<u8>, foreground: Rgba<u8>) -> Rgba<u8> {
    match foreground[3] {
        0 => return background,
        255 => return foreground,
        _ => {}
    }

    let fg_alpha = foreground[3] as f32 / 255.0;
    let bg_alpha = background[3] as f32 / 255.0;

    let out_alpha = fg_alpha + bg_alpha * (1.0 - fg_alpha);

    if out_alpha < 0.001 {
        return Rgba([0, 0, 0, 0]);
    }

    let blend_channel = |fg: u8, bg: u8| -> u8 {
        let fg_f = fg as f32 / 255.0;
        let bg_f = bg as f32 / 255.0;
        let result = (fg_f * fg_alpha + bg_f * bg_alpha * (1.0 - fg_alpha)) / out_alpha;
        (result * 255.0).round().clamp(0.0, 255.0) as u8
    };

    Rgba([
        blend_channel(foreground[0], background[0]),
        blend_channel(foreground[1], background[1]),
        blend_channel(foreground[2], background[2]),
        (out_alpha * 255.0).round() as u8,
    ])
}

/// Composite `overlay` over `base` in place.
///
/// Both rasters must share the same dimensions; the compositor resizes the
/// overlay before calling this.
pub fn blend_over(base: &mut RgbaImage, overlay: &RgbaImage) {
    debug_assert_eq!(base.dimensions(), overlay.dimensions());

    for (dst, src) in base.pixels_mut().zip(overlay.pixels()) {
        *dst = blend_pixels(*dst, *src);
    }
}

/// Draw a single coverage sample of `color` onto `target`, clipping to its bounds.
pub fn blend_coverage(target: &mut RgbaImage, x: i32, y: i32, color: [u8; 3], coverage: f32) {
    if x < 0 || y < 0 || x >= target.width() as i32 || y >= target.height() as i32 {
        return;
    }

    let alpha = (coverage.clamp(0.0, 1.0) * 255.0).round() as u8;
    let pixel = Rgba([color[0], color[1], color[2], alpha]);
    let existing = target.get_pixel(x as u32, y as u32);
    let blended = blend_pixels(*existing, pixel);
    target.put_pixel(x as u32, y as u32, blended);
}
