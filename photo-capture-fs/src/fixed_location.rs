//! Location provider returning a fixed, preconfigured position.

use photo_capture_core::{CaptureError, GeoPosition, LocationProvider};

/// One-shot provider that always resolves to the same coordinates.
///
/// Stands in for a platform geolocation API in development setups where
/// the capture site is known ahead of time.
pub struct FixedLocationProvider {
    position: GeoPosition,
}

impl FixedLocationProvider {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            position: GeoPosition::new(latitude, longitude),
        }
    }
}

impl LocationProvider for FixedLocationProvider {
    fn current_position(&self) -> Result<GeoPosition, CaptureError> {
        Ok(self.position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_to_the_configured_coordinates() {
        let provider = FixedLocationProvider::new(12.345678, 77.123456);
        let position = provider.current_position().unwrap();
        assert_eq!(position, GeoPosition::new(12.345678, 77.123456));
    }
}
