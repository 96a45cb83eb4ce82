/// Configuration for a capture session.
///
/// Overlay geometry defaults mirror the fixed layout contract: lines stacked
/// bottom-up at a 30 px stride, 10 px left margin, 24 px highlight rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaptureConfiguration {
    /// JPEG quality for the encoded artifact, 0–100 (default: 92).
    pub jpeg_quality: u8,

    /// Left margin of every overlay line, in pixels from the left edge.
    pub left_margin_px: i32,

    /// Vertical distance between consecutive overlay lines.
    pub line_stride_px: i32,

    /// Horizontal and vertical padding between text and its highlight box.
    pub text_pad_px: i32,

    /// Height of the highlight box behind each line.
    pub highlight_height_px: i32,

    /// Alpha of the dark highlight box (128 ≈ 0.5 opacity).
    pub highlight_alpha: u8,

    /// Render label rows even when the label text is empty, preserving the
    /// vertical slot count. When off, blank label rows are omitted and the
    /// remaining rows re-stack from the bottom.
    pub draw_blank_lines: bool,

    /// Specific camera device ID to bind at startup, or None for the
    /// source's default device.
    pub device_id: Option<String>,
}

impl CaptureConfiguration {
    pub fn validate(&self) -> Result<(), String> {
        if self.jpeg_quality > 100 {
            return Err(format!("jpeg quality out of range: {}", self.jpeg_quality));
        }
        if self.line_stride_px <= 0 {
            return Err("line stride must be positive".into());
        }
        if self.highlight_height_px <= 0 {
            return Err("highlight height must be positive".into());
        }
        if self.left_margin_px < 0 || self.text_pad_px < 0 {
            return Err("margins must be non-negative".into());
        }
        Ok(())
    }
}

impl Default for CaptureConfiguration {
    fn default() -> Self {
        Self {
            jpeg_quality: 92,
            left_margin_px: 10,
            line_stride_px: 30,
            text_pad_px: 2,
            highlight_height_px: 24,
            highlight_alpha: 128,
            draw_blank_lines: true,
            device_id: None,
        }
    }
}
