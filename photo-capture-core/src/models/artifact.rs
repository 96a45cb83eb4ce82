use serde::{Deserialize, Serialize};

use super::capture_models::{AnnotationLabels, GeoPosition};

/// MIME type of every artifact produced by the compositor.
pub const ARTIFACT_MIME_TYPE: &str = "image/jpeg";

/// The final composited image, encoded as a JPEG byte buffer.
///
/// Owned by the session controller; replaced on each new capture; exists
/// only after a successful capture-and-composite cycle. Share sinks consume
/// it read-only.
#[derive(Debug, Clone, PartialEq)]
pub struct Artifact {
    pub bytes: Vec<u8>,
    pub metadata: ArtifactMetadata,
}

impl Artifact {
    pub fn width(&self) -> u32 {
        self.metadata.width
    }

    pub fn height(&self) -> u32 {
        self.metadata.height
    }

    pub fn mime_type(&self) -> &str {
        &self.metadata.mime_type
    }
}

/// Metadata describing an artifact.
///
/// Serializable for JSON sidecar export.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArtifactMetadata {
    pub id: String,
    pub created_at: String,
    pub width: u32,
    pub height: u32,
    pub mime_type: String,
    pub quality: u8,
    pub latitude: f64,
    pub longitude: f64,
    pub district: String,
    pub excise_station: String,
}

impl ArtifactMetadata {
    pub fn new(
        width: u32,
        height: u32,
        quality: u8,
        position: GeoPosition,
        labels: &AnnotationLabels,
    ) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            created_at: chrono::Utc::now().to_rfc3339(),
            width,
            height,
            mime_type: ARTIFACT_MIME_TYPE.to_string(),
            quality,
            latitude: position.latitude,
            longitude: position.longitude,
            district: labels.district.clone(),
            excise_station: labels.excise_station.clone(),
        }
    }
}
