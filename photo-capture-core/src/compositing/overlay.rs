//! Overlay compositor: burns geolocation and label text into a snapshot.
//!
//! Pure transformation: given an encoded snapshot buffer plus position and
//! labels, produces a new encoded artifact of identical pixel dimensions.
//! The input buffer is never mutated. Each line gets a two-pass draw: a
//! semi-transparent dark box sized to the measured text, then the text in
//! white on top, so the overlay stays legible over arbitrary photographic
//! backgrounds.
//!
//! Compositing is not idempotent: reapplying it to its own output would
//! double-stamp the text. The session controller guarantees it runs exactly
//! once per raw snapshot.

use std::sync::Arc;

use image::{Pixel, Rgba, RgbaImage};

use crate::compositing::{jpeg_format, layout};
use crate::models::artifact::{Artifact, ArtifactMetadata};
use crate::models::capture_models::{AnnotationLabels, GeoPosition};
use crate::models::config::CaptureConfiguration;
use crate::models::error::CaptureError;
use crate::traits::text_rasterizer::TextRasterizer;

const TEXT_COLOR: Rgba<u8> = Rgba([255, 255, 255, 255]);

pub struct OverlayCompositor {
    rasterizer: Arc<dyn TextRasterizer>,
    config: CaptureConfiguration,
}

impl OverlayCompositor {
    pub fn new(rasterizer: Arc<dyn TextRasterizer>, config: CaptureConfiguration) -> Self {
        Self { rasterizer, config }
    }

    /// Geolocation line, always rendered with exactly 6 fractional digits.
    pub fn coordinate_line(position: &GeoPosition) -> String {
        format!(
            "Lat: {:.6}, Long: {:.6}",
            position.latitude, position.longitude
        )
    }

    pub fn district_line(labels: &AnnotationLabels) -> String {
        format!("District: {}", labels.district)
    }

    pub fn station_line(labels: &AnnotationLabels) -> String {
        format!("Excise Station: {}", labels.excise_station)
    }

    /// Composite `snapshot` with the overlay and encode the result.
    ///
    /// Refuses to run without a resolved position; callers must have
    /// resolved location before capturing; no placeholder is ever rendered.
    pub fn composite(
        &self,
        snapshot: &[u8],
        position: Option<GeoPosition>,
        labels: &AnnotationLabels,
    ) -> Result<Artifact, CaptureError> {
        let position = position.ok_or(CaptureError::MissingLocation)?;

        let mut canvas = jpeg_format::decode_rgba(snapshot)?;
        let (width, height) = canvas.dimensions();

        let lines = self.overlay_lines(&position, labels);
        let highlight = Rgba([0, 0, 0, self.config.highlight_alpha]);

        // The last line sits closest to the bottom edge.
        for (index_from_bottom, line) in lines.iter().rev().enumerate() {
            let (x, y) = layout::text_origin(height, index_from_bottom, &self.config);
            let (text_width, _) = self.rasterizer.measure(line);
            let rect = layout::highlight_rect(x, y, text_width, &self.config);
            blend_rect(&mut canvas, &rect, highlight);
            self.rasterizer.draw(&mut canvas, x, y, TEXT_COLOR, line);
        }

        let bytes = jpeg_format::encode_jpeg(canvas, self.config.jpeg_quality)?;
        let metadata =
            ArtifactMetadata::new(width, height, self.config.jpeg_quality, position, labels);
        Ok(Artifact { bytes, metadata })
    }

    /// Ordered lines, topmost first.
    ///
    /// By default all three rows render even when a label is blank,
    /// preserving the vertical slot count. With `draw_blank_lines` off,
    /// blank label rows are omitted and the rest re-stack from the bottom.
    fn overlay_lines(&self, position: &GeoPosition, labels: &AnnotationLabels) -> Vec<String> {
        let mut lines = vec![Self::coordinate_line(position)];
        if self.config.draw_blank_lines || !labels.district.is_empty() {
            lines.push(Self::district_line(labels));
        }
        if self.config.draw_blank_lines || !labels.excise_station.is_empty() {
            lines.push(Self::station_line(labels));
        }
        lines
    }
}

/// Alpha-blend `color` over every canvas pixel inside `rect`, clipped to
/// the canvas bounds.
fn blend_rect(canvas: &mut RgbaImage, rect: &layout::HighlightRect, color: Rgba<u8>) {
    let (width, height) = canvas.dimensions();
    let x0 = rect.x.max(0) as u32;
    let y0 = rect.y.max(0) as u32;
    let x1 = (rect.x + rect.width).clamp(0, width as i32) as u32;
    let y1 = (rect.y + rect.height).clamp(0, height as i32) as u32;

    for y in y0..y1 {
        for x in x0..x1 {
            canvas.get_pixel_mut(x, y).blend(&color);
        }
    }
}
