use serde::{Deserialize, Serialize};

/// A device position resolved once per session by the location provider.
///
/// Immutable after capture: the compositor reads whatever value was current
/// the instant a capture was requested, never a live binding.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPosition {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoPosition {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

/// User-supplied free text stamped onto the photo alongside the position.
///
/// No validation: empty strings are permitted and rendered as-is.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnnotationLabels {
    pub district: String,
    pub excise_station: String,
}

impl AnnotationLabels {
    pub fn new(district: impl Into<String>, excise_station: impl Into<String>) -> Self {
        Self {
            district: district.into(),
            excise_station: excise_station.into(),
        }
    }
}

/// A camera device available for capture.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CameraDevice {
    /// Opaque device identifier used for binding.
    pub id: String,
    /// Human-readable label for device selection UIs.
    pub label: String,
}

/// Static metadata handed to a share sink along with the artifact bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareRequest {
    pub file_name: String,
    pub title: String,
    pub text: String,
}

impl Default for ShareRequest {
    fn default() -> Self {
        Self {
            file_name: "photo.jpg".to_string(),
            title: "Captured Photo".to_string(),
            text: "Check out this photo I captured!".to_string(),
        }
    }
}

/// Diagnostics for debugging capture sessions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionDiagnostics {
    pub snapshots_taken: u64,
    pub composites_completed: u64,
    pub failed_cycles: u64,
}
