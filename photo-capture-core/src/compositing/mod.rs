pub mod glyph;
pub mod jpeg_format;
pub mod layout;
pub mod overlay;
