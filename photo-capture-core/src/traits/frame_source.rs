use crate::models::capture_models::CameraDevice;
use crate::models::error::CaptureError;

/// Interface for platform-specific still-frame sources.
///
/// Wraps a live camera feed (or a stand-in for one) and exposes device
/// enumeration, bind-to-device, and a snapshot operation returning an
/// encoded image buffer from the currently bound device.
pub trait FrameSource: Send + Sync {
    /// Enumerate available camera devices with opaque IDs and
    /// human-readable labels.
    fn devices(&self) -> Result<Vec<CameraDevice>, CaptureError>;

    /// Rebind to a different physical device.
    ///
    /// Does not affect a previously captured frame or artifact; only the
    /// next snapshot reads from the new device.
    fn bind(&mut self, device_id: &str) -> Result<(), CaptureError>;

    /// The currently bound device, or None if no stream is active.
    fn bound_device(&self) -> Option<&CameraDevice>;

    /// Take a still frame from the bound device's live feed, returned as an
    /// encoded image buffer.
    ///
    /// Fails with `DeviceUnavailable` when no device is bound.
    fn snapshot(&mut self) -> Result<Vec<u8>, CaptureError>;
}
