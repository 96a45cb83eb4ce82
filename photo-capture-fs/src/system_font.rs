//! Locates a bold system font for the overlay's glyph rasterizer.

use std::fs;
use std::path::PathBuf;

use photo_capture_core::{CaptureError, GlyphRasterizer, DEFAULT_FONT_PX};

/// Override path checked before the well-known locations.
pub const FONT_PATH_ENV: &str = "PHOTO_CAPTURE_FONT";

/// Well-known bold sans-serif font locations, most common first.
const FONT_CANDIDATES: &[&str] = &[
    "/usr/share/fonts/truetype/dejavu/DejaVuSans-Bold.ttf",
    "/usr/share/fonts/dejavu/DejaVuSans-Bold.ttf",
    "/usr/share/fonts/TTF/DejaVuSans-Bold.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Bold.ttf",
    "/usr/share/fonts/liberation-sans/LiberationSans-Bold.ttf",
    "/usr/share/fonts/truetype/freefont/FreeSansBold.ttf",
    "/usr/share/fonts/noto/NotoSans-Bold.ttf",
    "/System/Library/Fonts/Supplemental/Arial Bold.ttf",
    "C:\\Windows\\Fonts\\arialbd.ttf",
];

/// First usable font path: the `PHOTO_CAPTURE_FONT` override if set,
/// otherwise the first existing well-known candidate.
pub fn find_system_font() -> Option<PathBuf> {
    if let Ok(path) = std::env::var(FONT_PATH_ENV) {
        let path = PathBuf::from(path);
        if path.is_file() {
            return Some(path);
        }
        log::warn!("{} points at {:?}, which does not exist", FONT_PATH_ENV, path);
    }
    FONT_CANDIDATES
        .iter()
        .map(PathBuf::from)
        .find(|path| path.is_file())
}

/// Load a glyph rasterizer from a system font at the given pixel size.
pub fn load_rasterizer(px: f32) -> Result<GlyphRasterizer, CaptureError> {
    let path = find_system_font()
        .ok_or_else(|| CaptureError::FontUnavailable("no system font found".into()))?;
    log::debug!("loading overlay font from {:?}", path);
    let bytes = fs::read(&path)
        .map_err(|e| CaptureError::FontUnavailable(format!("cannot read {:?}: {}", path, e)))?;
    GlyphRasterizer::from_font_bytes(bytes, px)
}

/// Load a glyph rasterizer at the default overlay text size.
pub fn load_default_rasterizer() -> Result<GlyphRasterizer, CaptureError> {
    load_rasterizer(DEFAULT_FONT_PX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use photo_capture_core::TextRasterizer;

    #[test]
    fn loaded_rasterizer_measures_text() {
        // Hosts without any of the well-known fonts skip the assertion.
        let Ok(rasterizer) = load_default_rasterizer() else {
            return;
        };

        let (width, _) = rasterizer.measure("Lat: 12.345678, Long: 77.123456");
        assert!(width > 0);
        assert!(rasterizer.measure("District: North Zone").0 < width);
    }
}
