//! Image buffer codec helpers.
//!
//! Snapshots arrive as encoded buffers in whatever format the frame source
//! produces; artifacts always leave as JPEG. Decoding sniffs the format
//! from the buffer contents.

use image::codecs::jpeg::JpegEncoder;
use image::RgbaImage;

use crate::models::error::CaptureError;

/// Decode an encoded image buffer into an RGBA bitmap.
pub fn decode_rgba(bytes: &[u8]) -> Result<RgbaImage, CaptureError> {
    let img = image::load_from_memory(bytes)
        .map_err(|e| CaptureError::DecodeFailed(e.to_string()))?;
    Ok(img.to_rgba8())
}

/// Encode a bitmap as JPEG at the given quality (0–100).
///
/// JPEG carries no alpha channel, so the canvas is flattened to RGB first.
pub fn encode_jpeg(image: RgbaImage, quality: u8) -> Result<Vec<u8>, CaptureError> {
    let rgb = image::DynamicImage::ImageRgba8(image).to_rgb8();
    let mut bytes = Vec::new();
    let mut encoder = JpegEncoder::new_with_quality(&mut bytes, quality);
    encoder
        .encode_image(&rgb)
        .map_err(|e| CaptureError::EncodeFailed(e.to_string()))?;
    Ok(bytes)
}
