//! Production text rasterizer backed by `ab_glyph` + `imageproc`.

use ab_glyph::{FontArc, PxScale};
use image::{Rgba, RgbaImage};
use imageproc::drawing::{draw_text_mut, text_size};

use crate::models::error::CaptureError;
use crate::traits::text_rasterizer::TextRasterizer;

/// Text size of overlay lines, in pixels.
pub const DEFAULT_FONT_PX: f32 = 20.0;

/// Rasterizes text with a caller-supplied font at a fixed pixel scale.
///
/// The font bytes come from the embedding application or from
/// `photo_capture_fs::system_font` on desktop systems. A bold face is
/// expected for legibility over photographic backgrounds.
#[derive(Debug)]
pub struct GlyphRasterizer {
    font: FontArc,
    scale: PxScale,
}

impl GlyphRasterizer {
    pub fn from_font_bytes(bytes: Vec<u8>, px: f32) -> Result<Self, CaptureError> {
        let font = FontArc::try_from_vec(bytes)
            .map_err(|e| CaptureError::FontUnavailable(e.to_string()))?;
        Ok(Self {
            font,
            scale: PxScale::from(px),
        })
    }
}

impl TextRasterizer for GlyphRasterizer {
    fn measure(&self, text: &str) -> (u32, u32) {
        text_size(self.scale, &self.font, text)
    }

    fn draw(&self, canvas: &mut RgbaImage, x: i32, y: i32, color: Rgba<u8>, text: &str) {
        draw_text_mut(canvas, color, x, y, self.scale, &self.font, text);
    }
}
