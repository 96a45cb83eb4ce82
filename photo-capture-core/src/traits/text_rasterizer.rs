use image::{Rgba, RgbaImage};

/// 2D text measurement and drawing capability used by the compositor.
///
/// The compositor treats rasterization as a narrow platform-provided
/// primitive: it only needs per-line width measurement and a top-left
/// anchored draw. The crate ships `GlyphRasterizer` as the production
/// implementation; tests substitute deterministic stubs.
pub trait TextRasterizer: Send + Sync {
    /// Measured pixel size of `text` at the rasterizer's configured scale.
    fn measure(&self, text: &str) -> (u32, u32);

    /// Draw `text` with its top-left corner at `(x, y)`.
    ///
    /// Pixels falling outside the canvas are clipped, not an error.
    fn draw(&self, canvas: &mut RgbaImage, x: i32, y: i32, color: Rgba<u8>, text: &str);
}
