//! Overlay line geometry.
//!
//! The layout is deliberately fixed rather than computed from font metrics:
//! lines stack bottom-up starting one stride above the bottom edge, each
//! subsequent line one stride further up, at a fixed left margin. Only the
//! highlight width follows the measured text.

use crate::models::config::CaptureConfiguration;

/// Highlight box drawn behind one line of text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HighlightRect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

/// Top-left anchor of the text for the line `index_from_bottom` slots above
/// the bottom edge (0 = lowest line).
pub fn text_origin(
    image_height: u32,
    index_from_bottom: usize,
    config: &CaptureConfiguration,
) -> (i32, i32) {
    let y = image_height as i32 - config.line_stride_px * (index_from_bottom as i32 + 1);
    (config.left_margin_px, y)
}

/// Highlight box for a line whose text starts at `(text_x, text_y)` and
/// measures `text_width` pixels wide.
pub fn highlight_rect(
    text_x: i32,
    text_y: i32,
    text_width: u32,
    config: &CaptureConfiguration,
) -> HighlightRect {
    HighlightRect {
        x: text_x - config.text_pad_px,
        y: text_y - config.text_pad_px,
        width: text_width as i32 + config.text_pad_px * 2,
        height: config.highlight_height_px,
    }
}
