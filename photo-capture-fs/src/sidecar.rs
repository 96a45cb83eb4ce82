//! JSON metadata sidecars for shared artifacts.

use std::fs;
use std::path::Path;

use photo_capture_core::{ArtifactMetadata, CaptureError};

/// Write artifact metadata as a JSON sidecar file.
///
/// Creates `{artifact_path}.metadata.json` alongside the artifact.
pub fn write_sidecar(metadata: &ArtifactMetadata, artifact_path: &Path) -> Result<(), CaptureError> {
    let sidecar_path = artifact_path.with_extension("metadata.json");
    let json = serde_json::to_string_pretty(metadata)
        .map_err(|e| CaptureError::ShareFailed(format!("failed to serialize metadata: {}", e)))?;
    fs::write(&sidecar_path, json)
        .map_err(|e| CaptureError::ShareFailed(format!("failed to write metadata: {}", e)))?;
    Ok(())
}

/// Read artifact metadata from a JSON sidecar file.
pub fn read_sidecar(artifact_path: &Path) -> Result<ArtifactMetadata, CaptureError> {
    let sidecar_path = artifact_path.with_extension("metadata.json");
    let json = fs::read_to_string(&sidecar_path)
        .map_err(|e| CaptureError::ShareFailed(format!("failed to read metadata: {}", e)))?;
    let metadata: ArtifactMetadata = serde_json::from_str(&json)
        .map_err(|e| CaptureError::ShareFailed(format!("failed to parse metadata: {}", e)))?;
    Ok(metadata)
}
