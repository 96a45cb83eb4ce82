use crate::models::artifact::Artifact;
use crate::models::capture_models::ShareRequest;
use crate::models::error::CaptureError;

/// Interface for platform share mechanisms.
///
/// Sharing is best-effort and non-critical: the session controller probes
/// `is_available` first, logs failures, and never propagates share errors
/// back into the capture cycle.
pub trait ShareSink: Send + Sync {
    /// Whether the platform share mechanism can be used right now.
    fn is_available(&self) -> bool;

    /// Hand the artifact to the share mechanism as a named file with the
    /// request's MIME-typed payload and static title/text metadata.
    fn share(&self, request: &ShareRequest, artifact: &Artifact) -> Result<(), CaptureError>;
}
