use crate::models::artifact::Artifact;
use crate::models::error::CaptureError;
use crate::models::state::SessionPhase;

/// Event delegate for capture session notifications.
///
/// Methods are called synchronously from whatever thread drives the
/// session. Implementations should marshal to the UI thread if needed.
pub trait CaptureDelegate: Send + Sync {
    /// Called when the session phase changes.
    fn on_phase_changed(&self, phase: &SessionPhase);

    /// Called when a capture cycle completes and the artifact is stored.
    fn on_artifact_ready(&self, artifact: &Artifact);

    /// Called when an error occurs during location resolution, capture,
    /// compositing, or sharing.
    fn on_error(&self, error: &CaptureError);
}
