use crate::models::capture_models::GeoPosition;
use crate::models::error::CaptureError;

/// Interface for one-shot device positioning.
///
/// No continuous tracking: the session queries once and holds the result
/// for the lifetime of the session. Implementations wrap a platform
/// geolocation API or, for the filesystem backend, a fixed coordinate.
pub trait LocationProvider: Send + Sync {
    /// Resolve the device's current position.
    ///
    /// Fails with `PositionUnavailable` when the platform cannot produce a
    /// fix, or `PermissionDenied` when the user refused access.
    fn current_position(&self) -> Result<GeoPosition, CaptureError>;
}
