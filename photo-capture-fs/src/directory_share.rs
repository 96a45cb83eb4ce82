//! Share sink writing artifacts into a local directory.

use std::path::PathBuf;

use photo_capture_core::{Artifact, CaptureError, ShareRequest, ShareSink};

use crate::sidecar;

/// Best-effort share target that drops the artifact (and a JSON metadata
/// sidecar) into a directory, e.g. a synced or watched folder.
pub struct DirectoryShareSink {
    directory: PathBuf,
    write_sidecar: bool,
}

impl DirectoryShareSink {
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
            write_sidecar: true,
        }
    }

    pub fn without_sidecar(mut self) -> Self {
        self.write_sidecar = false;
        self
    }
}

impl ShareSink for DirectoryShareSink {
    fn is_available(&self) -> bool {
        self.directory.is_dir()
    }

    fn share(&self, request: &ShareRequest, artifact: &Artifact) -> Result<(), CaptureError> {
        let path = self.directory.join(&request.file_name);
        std::fs::write(&path, &artifact.bytes)
            .map_err(|e| CaptureError::ShareFailed(format!("failed to write {:?}: {}", path, e)))?;
        if self.write_sidecar {
            sidecar::write_sidecar(&artifact.metadata, &path)?;
        }
        log::info!(
            "shared \"{}\" to {:?} ({} bytes, {})",
            request.title,
            path,
            artifact.bytes.len(),
            artifact.mime_type()
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use photo_capture_core::{AnnotationLabels, ArtifactMetadata, GeoPosition};

    fn artifact() -> Artifact {
        Artifact {
            bytes: vec![0xFF, 0xD8, 0xFF, 0xE0],
            metadata: ArtifactMetadata::new(
                2,
                2,
                92,
                GeoPosition::new(1.0, 2.0),
                &AnnotationLabels::new("D", "S"),
            ),
        }
    }

    #[test]
    fn share_writes_artifact_and_sidecar() {
        let dir = tempfile::tempdir().unwrap();
        let sink = DirectoryShareSink::new(dir.path());

        assert!(sink.is_available());
        sink.share(&ShareRequest::default(), &artifact()).unwrap();

        let written = std::fs::read(dir.path().join("photo.jpg")).unwrap();
        assert_eq!(written, artifact().bytes);
        let sidecar = sidecar::read_sidecar(&dir.path().join("photo.jpg")).unwrap();
        assert_eq!(sidecar.district, "D");
    }

    #[test]
    fn sidecar_can_be_disabled() {
        let dir = tempfile::tempdir().unwrap();
        let sink = DirectoryShareSink::new(dir.path()).without_sidecar();

        sink.share(&ShareRequest::default(), &artifact()).unwrap();

        assert!(dir.path().join("photo.jpg").exists());
        assert!(!dir.path().join("photo.metadata.json").exists());
    }

    #[test]
    fn missing_directory_is_unavailable() {
        let sink = DirectoryShareSink::new("/nonexistent/share/target");
        assert!(!sink.is_available());
    }
}
