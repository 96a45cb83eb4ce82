//! # photo-capture-fs
//!
//! Filesystem backend for photo-capture-kit.
//!
//! Provides:
//! - `StillImageCamera`: `FrameSource` whose devices are image files on disk
//! - `FixedLocationProvider`: one-shot provider with preconfigured coordinates
//! - `DirectoryShareSink`: share target writing the artifact plus a JSON
//!   metadata sidecar into a directory
//! - `system_font`: locates a bold system font for the glyph rasterizer
//!
//! ## Usage
//! ```ignore
//! use photo_capture_core::{CaptureSession, PhotoSession};
//! use photo_capture_fs::{FixedLocationProvider, StillImageCamera, system_font};
//!
//! let camera = StillImageCamera::scan("shots/".as_ref())?;
//! let locator = FixedLocationProvider::new(12.345678, 77.123456);
//! let rasterizer = std::sync::Arc::new(system_font::load_default_rasterizer()?);
//! let mut session = PhotoSession::new(camera, locator, rasterizer);
//! ```

pub mod directory_share;
pub mod fixed_location;
pub mod sidecar;
pub mod still_camera;
pub mod system_font;

pub use directory_share::DirectoryShareSink;
pub use fixed_location::FixedLocationProvider;
pub use still_camera::StillImageCamera;
