use crate::models::artifact::Artifact;
use crate::models::capture_models::{AnnotationLabels, CameraDevice, GeoPosition, SessionDiagnostics};
use crate::models::config::CaptureConfiguration;
use crate::models::error::CaptureError;
use crate::models::state::SessionPhase;
use crate::traits::share_sink::ShareSink;

/// Main capture session interface.
///
/// Orchestrates one capture-to-artifact cycle: snapshot from the bound
/// device, composite with the current position and labels, store the
/// result. Implemented by `session::PhotoSession`.
pub trait CaptureSession: Send + Sync {
    /// Current session phase.
    fn phase(&self) -> SessionPhase;

    /// Counters for debugging capture sessions.
    fn diagnostics(&self) -> SessionDiagnostics;

    /// Apply configuration. Only permitted while idle.
    fn configure(&mut self, config: CaptureConfiguration) -> Result<(), CaptureError>;

    /// Enumerate camera devices from the frame source.
    fn devices(&self) -> Result<Vec<CameraDevice>, CaptureError>;

    /// Rebind the frame source to a different camera. Never affects a
    /// previously stored artifact.
    fn select_device(&mut self, device_id: &str) -> Result<(), CaptureError>;

    /// One-shot location query. On success the position is held in session
    /// state for all subsequent captures; on failure the session continues
    /// with an absent position and the compositor will refuse to run.
    fn resolve_location(&mut self) -> Result<GeoPosition, CaptureError>;

    /// The resolved position, if any.
    fn position(&self) -> Option<GeoPosition>;

    /// Labels that will be stamped onto the next capture.
    fn labels(&self) -> AnnotationLabels;

    /// Replace the annotation labels. Effective on the next capture only;
    /// an existing artifact is never retroactively altered.
    fn update_labels(&mut self, labels: AnnotationLabels);

    /// Run one capture-to-artifact cycle and store the result.
    ///
    /// A failed cycle leaves the prior artifact, if any, in place and
    /// returns the session to idle.
    fn request_capture(&mut self) -> Result<Artifact, CaptureError>;

    /// The most recent artifact, or None if no cycle has succeeded.
    fn current_artifact(&self) -> Option<Artifact>;

    /// Hand the current artifact to `sink`, best-effort. Logs and swallows
    /// every failure; never throws back into the controller.
    fn share_artifact(&self, sink: &dyn ShareSink);
}
