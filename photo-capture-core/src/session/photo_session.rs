use std::sync::Arc;

use parking_lot::Mutex;

use crate::compositing::overlay::OverlayCompositor;
use crate::models::artifact::Artifact;
use crate::models::capture_models::{
    AnnotationLabels, CameraDevice, GeoPosition, SessionDiagnostics, ShareRequest,
};
use crate::models::config::CaptureConfiguration;
use crate::models::error::CaptureError;
use crate::models::state::SessionPhase;
use crate::traits::capture_delegate::CaptureDelegate;
use crate::traits::capture_session::CaptureSession;
use crate::traits::frame_source::FrameSource;
use crate::traits::location_provider::LocationProvider;
use crate::traits::share_sink::ShareSink;
use crate::traits::text_rasterizer::TextRasterizer;

/// Internal mutable session state, protected by `parking_lot::Mutex`.
struct SessionState {
    phase: SessionPhase,
    position: Option<GeoPosition>,
    labels: AnnotationLabels,
    artifact: Option<Artifact>,
    diagnostics: SessionDiagnostics,
}

impl SessionState {
    fn new() -> Self {
        Self {
            phase: SessionPhase::Idle,
            position: None,
            labels: AnnotationLabels::default(),
            artifact: None,
            diagnostics: SessionDiagnostics::default(),
        }
    }
}

/// Platform-agnostic capture session controller.
///
/// Generic over the camera and location backends via the `FrameSource` and
/// `LocationProvider` traits. Coordinates one capture-to-artifact cycle:
///
/// ```text
/// [LocationProvider] → GeoPosition ─┐
/// [FrameSource] → snapshot ─────────┼→ [OverlayCompositor] → Artifact → [ShareSink]
/// user labels ──────────────────────┘
/// ```
///
/// `request_capture` runs to completion before returning, so a device
/// rebind can never interleave with an in-flight capture and the compositor
/// is invoked exactly once per raw snapshot, never on an already
/// composited artifact.
pub struct PhotoSession<C: FrameSource, L: LocationProvider> {
    camera: C,
    locator: L,
    rasterizer: Arc<dyn TextRasterizer>,
    config: CaptureConfiguration,
    session_state: Arc<Mutex<SessionState>>,
    delegate: Option<Arc<dyn CaptureDelegate>>,
}

impl<C: FrameSource, L: LocationProvider> PhotoSession<C, L> {
    pub fn new(camera: C, locator: L, rasterizer: Arc<dyn TextRasterizer>) -> Self {
        Self {
            camera,
            locator,
            rasterizer,
            config: CaptureConfiguration::default(),
            session_state: Arc::new(Mutex::new(SessionState::new())),
            delegate: None,
        }
    }

    pub fn set_delegate(&mut self, delegate: Arc<dyn CaptureDelegate>) {
        self.delegate = Some(delegate);
    }

    fn set_phase(&self, phase: SessionPhase) {
        self.session_state.lock().phase = phase;
        if let Some(ref delegate) = self.delegate {
            delegate.on_phase_changed(&phase);
        }
    }

    fn report_error(&self, error: &CaptureError) {
        if let Some(ref delegate) = self.delegate {
            delegate.on_error(error);
        }
    }

    fn fail_cycle(&self, error: CaptureError) -> CaptureError {
        self.session_state.lock().diagnostics.failed_cycles += 1;
        self.set_phase(SessionPhase::Idle);
        log::error!("capture cycle failed: {}", error);
        self.report_error(&error);
        error
    }
}

impl<C: FrameSource, L: LocationProvider> CaptureSession for PhotoSession<C, L> {
    fn phase(&self) -> SessionPhase {
        self.session_state.lock().phase
    }

    fn diagnostics(&self) -> SessionDiagnostics {
        self.session_state.lock().diagnostics
    }

    /// Apply configuration. Only permitted while idle.
    fn configure(&mut self, config: CaptureConfiguration) -> Result<(), CaptureError> {
        if !self.phase().is_idle() {
            return Err(CaptureError::ConfigurationFailed(
                "can only configure from idle state".into(),
            ));
        }
        config.validate().map_err(CaptureError::ConfigurationFailed)?;

        if let Some(device_id) = config.device_id.clone() {
            self.camera.bind(&device_id)?;
        }
        self.config = config;
        Ok(())
    }

    fn devices(&self) -> Result<Vec<CameraDevice>, CaptureError> {
        self.camera.devices()
    }

    fn select_device(&mut self, device_id: &str) -> Result<(), CaptureError> {
        self.camera.bind(device_id)?;
        log::debug!("camera rebound to device {}", device_id);
        Ok(())
    }

    /// One-shot position query.
    ///
    /// On failure the session keeps its absent position and stays usable;
    /// the compositor will refuse the next capture with `MissingLocation`
    /// until a later resolve succeeds.
    fn resolve_location(&mut self) -> Result<GeoPosition, CaptureError> {
        match self.locator.current_position() {
            Ok(position) => {
                self.session_state.lock().position = Some(position);
                log::debug!(
                    "location resolved: {:.6}, {:.6}",
                    position.latitude,
                    position.longitude
                );
                Ok(position)
            }
            Err(error) => {
                log::error!("failed to resolve location: {}", error);
                self.report_error(&error);
                Err(error)
            }
        }
    }

    fn position(&self) -> Option<GeoPosition> {
        self.session_state.lock().position
    }

    fn labels(&self) -> AnnotationLabels {
        self.session_state.lock().labels.clone()
    }

    fn update_labels(&mut self, labels: AnnotationLabels) {
        self.session_state.lock().labels = labels;
    }

    /// Run one capture-to-artifact cycle.
    ///
    /// The position and labels are read at the instant the compositor is
    /// invoked; a failed cycle leaves the prior artifact in place. Overlap
    /// needs no runtime guard: `&mut self` means a second cycle cannot
    /// start until this one has returned the session to idle.
    fn request_capture(&mut self) -> Result<Artifact, CaptureError> {
        if self.camera.bound_device().is_none() {
            let error = CaptureError::DeviceUnavailable("no camera device bound".into());
            self.report_error(&error);
            return Err(error);
        }

        self.set_phase(SessionPhase::Capturing);

        let snapshot = match self.camera.snapshot() {
            Ok(bytes) => bytes,
            Err(error) => return Err(self.fail_cycle(error)),
        };

        let (position, labels) = {
            let mut state = self.session_state.lock();
            state.diagnostics.snapshots_taken += 1;
            (state.position, state.labels.clone())
        };

        let compositor =
            OverlayCompositor::new(Arc::clone(&self.rasterizer), self.config.clone());
        let artifact = match compositor.composite(&snapshot, position, &labels) {
            Ok(artifact) => artifact,
            Err(error) => return Err(self.fail_cycle(error)),
        };

        {
            let mut state = self.session_state.lock();
            state.artifact = Some(artifact.clone());
            state.diagnostics.composites_completed += 1;
        }
        self.set_phase(SessionPhase::Composited);

        log::debug!(
            "artifact composited: {}x{}, {} bytes",
            artifact.width(),
            artifact.height(),
            artifact.bytes.len()
        );
        if let Some(ref delegate) = self.delegate {
            delegate.on_artifact_ready(&artifact);
        }

        self.set_phase(SessionPhase::Idle);
        Ok(artifact)
    }

    fn current_artifact(&self) -> Option<Artifact> {
        self.session_state.lock().artifact.clone()
    }

    /// Best-effort share of the current artifact.
    ///
    /// Logs and swallows every failure: a missing artifact or an
    /// unavailable sink must never disturb the capture session.
    fn share_artifact(&self, sink: &dyn ShareSink) {
        let artifact = self.session_state.lock().artifact.clone();
        let Some(artifact) = artifact else {
            log::warn!("share requested but no artifact has been captured");
            return;
        };
        if !sink.is_available() {
            log::warn!("share sink unavailable, skipping");
            self.report_error(&CaptureError::ShareUnsupported);
            return;
        }
        let request = ShareRequest::default();
        if let Err(error) = sink.share(&request, &artifact) {
            log::error!("share failed: {}", error);
            self.report_error(&error);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use std::sync::atomic::{AtomicBool, Ordering};

    use image::{Rgba, RgbaImage};

    fn encode_png(width: u32, height: u32) -> Vec<u8> {
        let img = image::DynamicImage::ImageRgba8(RgbaImage::from_pixel(
            width,
            height,
            Rgba([255, 255, 255, 255]),
        ));
        let mut bytes = Vec::new();
        img.write_to(&mut Cursor::new(&mut bytes), image::ImageFormat::Png)
            .unwrap();
        bytes
    }

    /// Frame source serving fixed frames per device ID.
    struct FakeCamera {
        devices: Vec<CameraDevice>,
        frames: Vec<Vec<u8>>,
        bound: Option<usize>,
    }

    impl FakeCamera {
        fn with_devices(frames: Vec<(&str, Vec<u8>)>) -> Self {
            let devices = frames
                .iter()
                .map(|(id, _)| CameraDevice {
                    id: id.to_string(),
                    label: format!("Camera {}", id),
                })
                .collect();
            Self {
                devices,
                frames: frames.into_iter().map(|(_, f)| f).collect(),
                bound: Some(0),
            }
        }

        fn unbound() -> Self {
            Self {
                devices: Vec::new(),
                frames: Vec::new(),
                bound: None,
            }
        }
    }

    impl FrameSource for FakeCamera {
        fn devices(&self) -> Result<Vec<CameraDevice>, CaptureError> {
            Ok(self.devices.clone())
        }

        fn bind(&mut self, device_id: &str) -> Result<(), CaptureError> {
            match self.devices.iter().position(|d| d.id == device_id) {
                Some(index) => {
                    self.bound = Some(index);
                    Ok(())
                }
                None => Err(CaptureError::DeviceUnavailable(format!(
                    "unknown camera device: {}",
                    device_id
                ))),
            }
        }

        fn bound_device(&self) -> Option<&CameraDevice> {
            self.bound.map(|i| &self.devices[i])
        }

        fn snapshot(&mut self) -> Result<Vec<u8>, CaptureError> {
            let index = self
                .bound
                .ok_or_else(|| CaptureError::DeviceUnavailable("no camera device bound".into()))?;
            Ok(self.frames[index].clone())
        }
    }

    struct FixedLocator(GeoPosition);

    impl LocationProvider for FixedLocator {
        fn current_position(&self) -> Result<GeoPosition, CaptureError> {
            Ok(self.0)
        }
    }

    struct DeniedLocator;

    impl LocationProvider for DeniedLocator {
        fn current_position(&self) -> Result<GeoPosition, CaptureError> {
            Err(CaptureError::PermissionDenied)
        }
    }

    /// Deterministic rasterizer: 8 px per character, solid blocks.
    struct BlockRasterizer;

    impl TextRasterizer for BlockRasterizer {
        fn measure(&self, text: &str) -> (u32, u32) {
            (text.chars().count() as u32 * 8, 20)
        }

        fn draw(&self, canvas: &mut RgbaImage, x: i32, y: i32, color: Rgba<u8>, text: &str) {
            let (w, h) = self.measure(text);
            let (cw, ch) = canvas.dimensions();
            for dy in 0..h {
                for dx in 0..w {
                    let px = x + dx as i32;
                    let py = y + dy as i32;
                    if px >= 0 && py >= 0 && (px as u32) < cw && (py as u32) < ch {
                        canvas.put_pixel(px as u32, py as u32, color);
                    }
                }
            }
        }
    }

    fn session_with(
        camera: FakeCamera,
    ) -> PhotoSession<FakeCamera, FixedLocator> {
        PhotoSession::new(
            camera,
            FixedLocator(GeoPosition::new(12.345678, 77.123456)),
            Arc::new(BlockRasterizer),
        )
    }

    fn default_session() -> PhotoSession<FakeCamera, FixedLocator> {
        session_with(FakeCamera::with_devices(vec![("cam0", encode_png(640, 480))]))
    }

    #[test]
    fn capture_without_resolved_location_fails_and_stores_nothing() {
        let mut session = default_session();

        let err = session.request_capture().unwrap_err();
        assert_eq!(err, CaptureError::MissingLocation);
        assert!(session.current_artifact().is_none());
        assert!(session.phase().is_idle());
        assert_eq!(session.diagnostics().failed_cycles, 1);
    }

    #[test]
    fn capture_produces_artifact_of_snapshot_dimensions() {
        let mut session = default_session();
        session.update_labels(AnnotationLabels::new("North Zone", "Station 7"));
        session.resolve_location().unwrap();

        let artifact = session.request_capture().unwrap();

        assert_eq!((artifact.width(), artifact.height()), (640, 480));
        assert_eq!(artifact.mime_type(), "image/jpeg");
        assert_eq!(artifact.metadata.district, "North Zone");
        assert_eq!(artifact.metadata.excise_station, "Station 7");
        assert_eq!(artifact.metadata.latitude, 12.345678);
        assert_eq!(session.current_artifact(), Some(artifact));
        assert!(session.phase().is_idle());

        let diag = session.diagnostics();
        assert_eq!(diag.snapshots_taken, 1);
        assert_eq!(diag.composites_completed, 1);
        assert_eq!(diag.failed_cycles, 0);
    }

    #[test]
    fn label_update_only_affects_the_next_capture() {
        let mut session = default_session();
        session.update_labels(AnnotationLabels::new("Old", "S1"));
        session.resolve_location().unwrap();

        let first = session.request_capture().unwrap();
        assert!(session.phase().is_idle());
        session.update_labels(AnnotationLabels::new("X", "Y"));

        // The stored artifact is untouched by the label update.
        let stored = session.current_artifact().unwrap();
        assert_eq!(stored, first);
        assert_eq!(stored.metadata.district, "Old");

        let second = session.request_capture().unwrap();
        assert_eq!(second.metadata.district, "X");
        assert_eq!(second.metadata.excise_station, "Y");
    }

    #[test]
    fn unresolved_location_after_success_keeps_prior_artifact() {
        let camera = FakeCamera::with_devices(vec![("cam0", encode_png(320, 240))]);
        let mut session = PhotoSession::new(camera, DeniedLocator, Arc::new(BlockRasterizer));
        // Seed a position by hand to get one success, then clear it.
        session.session_state.lock().position = Some(GeoPosition::new(1.0, 2.0));
        let first = session.request_capture().unwrap();

        session.session_state.lock().position = None;
        let err = session.request_capture().unwrap_err();
        assert_eq!(err, CaptureError::MissingLocation);
        assert_eq!(session.current_artifact(), Some(first));
    }

    #[test]
    fn capture_with_no_bound_device_is_rejected_without_state_change() {
        let mut session = session_with(FakeCamera::unbound());
        session.resolve_location().unwrap();

        let err = session.request_capture().unwrap_err();
        assert!(matches!(err, CaptureError::DeviceUnavailable(_)));
        assert!(session.current_artifact().is_none());
        assert!(session.phase().is_idle());
        assert_eq!(session.diagnostics().snapshots_taken, 0);
    }

    #[test]
    fn select_device_changes_only_the_next_snapshot_source() {
        let camera = FakeCamera::with_devices(vec![
            ("front", encode_png(640, 480)),
            ("rear", encode_png(1280, 720)),
        ]);
        let mut session = session_with(camera);
        session.resolve_location().unwrap();

        let first = session.request_capture().unwrap();
        assert_eq!((first.width(), first.height()), (640, 480));

        session.select_device("rear").unwrap();
        // Rebinding must not retroactively touch the stored artifact.
        assert_eq!(session.current_artifact(), Some(first));

        let second = session.request_capture().unwrap();
        assert_eq!((second.width(), second.height()), (1280, 720));
    }

    #[test]
    fn selecting_unknown_device_fails() {
        let mut session = default_session();
        let err = session.select_device("does-not-exist").unwrap_err();
        assert!(matches!(err, CaptureError::DeviceUnavailable(_)));
    }

    #[test]
    fn failed_location_resolution_reports_and_continues() {
        let camera = FakeCamera::with_devices(vec![("cam0", encode_png(64, 64))]);
        let mut session = PhotoSession::new(camera, DeniedLocator, Arc::new(BlockRasterizer));

        let err = session.resolve_location().unwrap_err();
        assert_eq!(err, CaptureError::PermissionDenied);
        assert_eq!(session.position(), None);
        assert!(session.phase().is_idle());
    }

    #[test]
    fn configure_validates_and_binds_requested_device() {
        let camera = FakeCamera::with_devices(vec![
            ("front", encode_png(64, 64)),
            ("rear", encode_png(64, 64)),
        ]);
        let mut session = session_with(camera);

        let err = session
            .configure(CaptureConfiguration {
                jpeg_quality: 200,
                ..Default::default()
            })
            .unwrap_err();
        assert!(matches!(err, CaptureError::ConfigurationFailed(_)));

        session
            .configure(CaptureConfiguration {
                device_id: Some("rear".into()),
                ..Default::default()
            })
            .unwrap();
        assert_eq!(session.camera.bound_device().unwrap().id, "rear");
    }

    #[test]
    fn delegate_observes_phases_artifact_and_errors() {
        use parking_lot::Mutex as PlMutex;

        #[derive(Default)]
        struct Recorder {
            phases: PlMutex<Vec<SessionPhase>>,
            artifacts: PlMutex<u32>,
            errors: PlMutex<Vec<CaptureError>>,
        }

        impl CaptureDelegate for Recorder {
            fn on_phase_changed(&self, phase: &SessionPhase) {
                self.phases.lock().push(*phase);
            }
            fn on_artifact_ready(&self, _artifact: &Artifact) {
                *self.artifacts.lock() += 1;
            }
            fn on_error(&self, error: &CaptureError) {
                self.errors.lock().push(error.clone());
            }
        }

        let recorder = Arc::new(Recorder::default());
        let mut session = default_session();
        session.set_delegate(recorder.clone());

        // Failing capture (no location) reports the error.
        let _ = session.request_capture();
        assert_eq!(recorder.errors.lock().as_slice(), &[CaptureError::MissingLocation]);

        session.resolve_location().unwrap();
        session.request_capture().unwrap();

        let phases = recorder.phases.lock();
        let cycle = &phases[phases.len() - 3..];
        assert!(cycle[0].is_capturing());
        assert!(cycle[1].is_composited());
        assert!(cycle[2].is_idle());
        assert_eq!(*recorder.artifacts.lock(), 1);
    }

    #[test]
    fn share_is_best_effort_and_never_propagates() {
        struct RecordingSink {
            available: bool,
            shared: AtomicBool,
        }

        impl ShareSink for RecordingSink {
            fn is_available(&self) -> bool {
                self.available
            }
            fn share(&self, request: &ShareRequest, artifact: &Artifact) -> Result<(), CaptureError> {
                assert_eq!(request.file_name, "photo.jpg");
                assert!(!artifact.bytes.is_empty());
                self.shared.store(true, Ordering::SeqCst);
                Ok(())
            }
        }

        struct FailingSink;

        impl ShareSink for FailingSink {
            fn is_available(&self) -> bool {
                true
            }
            fn share(&self, _: &ShareRequest, _: &Artifact) -> Result<(), CaptureError> {
                Err(CaptureError::ShareFailed("platform rejected".into()))
            }
        }

        let mut session = default_session();

        // No artifact yet: silently skipped.
        session.share_artifact(&FailingSink);

        session.resolve_location().unwrap();
        session.request_capture().unwrap();

        // Unavailable sink: silently skipped.
        let sink = RecordingSink {
            available: false,
            shared: AtomicBool::new(false),
        };
        session.share_artifact(&sink);
        assert!(!sink.shared.load(Ordering::SeqCst));

        // Failing sink: swallowed.
        session.share_artifact(&FailingSink);

        // Working sink: receives the artifact.
        let sink = RecordingSink {
            available: true,
            shared: AtomicBool::new(false),
        };
        session.share_artifact(&sink);
        assert!(sink.shared.load(Ordering::SeqCst));
    }
}
