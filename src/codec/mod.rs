//! Raster decoding and PNG encoding.
//!
//! Every input is normalised to 8-bit RGBA on load: sources without an alpha
//! channel come in fully opaque. Output is always PNG, tagged with the logical
//! file name the caller should attach when transmitting it.

use crate::error::StampError;
use image::io::Reader as ImageReader;
use image::{DynamicImage, RgbaImage};
use std::io::Cursor;
use std::path::{Path, PathBuf};

/// Logical file name of a watermark composite.
pub const COMPOSITE_NAME: &str = "result.png";

/// Logical file name of a text render.
pub const TEXT_RENDER_NAME: &str = "text.png";

/// Where a raster comes from.
#[derive(Debug, Clone, Copy)]
pub enum ImageSource<'a> {
    /// Encoded image bytes already in memory (caller input).
    Bytes(&'a [u8]),
    /// Image file on disk (collaborator-owned resource).
    Path(&'a Path),
}

impl<'a> From<&'a [u8]> for ImageSource<'a> {
    fn from(bytes: &'a [u8]) -> Self {
        ImageSource::Bytes(bytes)
    }
}

impl<'a> From<&'a Path> for ImageSource<'a> {
    fn from(path: &'a Path) -> Self {
        ImageSource::Path(path)
    }
}

impl<'a> From<&'a PathBuf> for ImageSource<'a> {
    fn from(path: &'a PathBuf) -> Self {
        ImageSource::Path(path.as_path())
    }
}

impl ImageSource<'_> {
    /// Load the source as an RGBA raster.
    ///
    /// Byte sources fail with `Decode`; path sources fail with `Resource`.
    pub fn load(&self) -> Result<RgbaImage, StampError> {
        match self {
            ImageSource::Bytes(bytes) => decode_rgba(bytes),
            ImageSource::Path(path) => load_rgba(path),
        }
    }
}

/// An encoded output image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedImage {
    /// PNG bytes
    pub data: Vec<u8>,
    /// Logical file name (`result.png`, `text.png`)
    pub name: &'static str,
}

impl EncodedImage {
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

/// Decode image bytes of any supported format into RGBA.
pub fn decode_rgba(data: &[u8]) -> Result<RgbaImage, StampError> {
    decode_dynamic(data)
        .map(|img| img.to_rgba8())
        .map_err(StampError::Decode)
}

/// Read and decode an image file into RGBA.
pub fn load_rgba(path: &Path) -> Result<RgbaImage, StampError> {
    let data = std::fs::read(path).map_err(|e| StampError::resource(path, e.to_string()))?;
    decode_dynamic(&data)
        .map(|img| img.to_rgba8())
        .map_err(|message| StampError::resource(path, message))
}

fn decode_dynamic(data: &[u8]) -> Result<DynamicImage, String> {
    ImageReader::new(Cursor::new(data))
        .with_guessed_format()
        .map_err(|e| e.to_string())?
        .decode()
        .map_err(|e| e.to_string())
}

/// Encode an RGBA raster as PNG.
pub fn encode_png(image: &RgbaImage, name: &'static str) -> Result<EncodedImage, StampError> {
    use image::codecs::png::PngEncoder;
    use image::ImageEncoder as _;

    let mut output = Cursor::new(Vec::new());
    PngEncoder::new(&mut output)
        .write_image(
            image.as_raw(),
            image.width(),
            image.height(),
            image::ColorType::Rgba8,
        )
        .map_err(|e| StampError::Encode(e.to_string()))?;

    Ok(EncodedImage {
        data: output.into_inner(),
        name,
    })
}
