//! # photo-capture-core
//!
//! Platform-agnostic photo capture core library.
//!
//! Provides overlay compositing, JPEG artifact encoding, and session
//! orchestration for geo-stamped field photography. Platform-specific
//! backends (webcam, geolocation, share sheet) implement the collaborator
//! traits and plug into the generic `PhotoSession`.
//!
//! ## Architecture
//!
//! ```text
//! photo-capture-core (this crate)
//! ├── traits/        ← FrameSource, LocationProvider, ShareSink, CaptureSession,
//! │                    CaptureDelegate, TextRasterizer
//! ├── models/        ← CaptureError, SessionPhase, CaptureConfiguration,
//! │                    GeoPosition, AnnotationLabels, Artifact, etc.
//! ├── compositing/   ← OverlayCompositor, line layout, JPEG codec helpers,
//! │                    GlyphRasterizer
//! └── session/       ← PhotoSession (generic orchestrator)
//! ```

pub mod compositing;
pub mod models;
pub mod session;
pub mod traits;

// Re-export key types at crate root for convenience.
pub use compositing::glyph::{GlyphRasterizer, DEFAULT_FONT_PX};
pub use compositing::overlay::OverlayCompositor;
pub use models::artifact::{Artifact, ArtifactMetadata, ARTIFACT_MIME_TYPE};
pub use models::capture_models::{
    AnnotationLabels, CameraDevice, GeoPosition, SessionDiagnostics, ShareRequest,
};
pub use models::config::CaptureConfiguration;
pub use models::error::CaptureError;
pub use models::state::SessionPhase;
pub use session::photo_session::PhotoSession;
pub use traits::capture_delegate::CaptureDelegate;
pub use traits::capture_session::CaptureSession;
pub use traits::frame_source::FrameSource;
pub use traits::location_provider::LocationProvider;
pub use traits::share_sink::ShareSink;
pub use traits::text_rasterizer::TextRasterizer;
