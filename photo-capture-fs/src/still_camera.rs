//! Still-image camera backed by image files on disk.
//!
//! Each image file acts as one camera device: enumeration lists the files,
//! binding selects one, and every snapshot re-reads its encoded bytes. Used
//! as the reference `FrameSource` for development and pipeline tests.

use std::fs;
use std::path::{Path, PathBuf};

use photo_capture_core::{CameraDevice, CaptureError, FrameSource};

pub struct StillImageCamera {
    devices: Vec<(CameraDevice, PathBuf)>,
    bound: Option<usize>,
}

impl StillImageCamera {
    /// Build a camera from explicit image files, in the given order.
    /// Binds the first device by default.
    pub fn from_files(paths: Vec<PathBuf>) -> Result<Self, CaptureError> {
        let mut devices = Vec::with_capacity(paths.len());
        for path in paths {
            devices.push((device_for(&path)?, path));
        }
        let bound = if devices.is_empty() { None } else { Some(0) };
        Ok(Self { devices, bound })
    }

    /// Scan `dir` for image files (by extension) and expose each as a
    /// device, sorted by file name. Binds the first device by default.
    pub fn scan(dir: &Path) -> Result<Self, CaptureError> {
        let entries = fs::read_dir(dir)
            .map_err(|e| CaptureError::DeviceUnavailable(format!("cannot scan {:?}: {}", dir, e)))?;

        let mut paths: Vec<PathBuf> = entries
            .filter_map(|entry| entry.ok().map(|e| e.path()))
            .filter(|path| {
                path.is_file()
                    && path
                        .extension()
                        .is_some_and(|ext| image::ImageFormat::from_extension(ext).is_some())
            })
            .collect();
        paths.sort();

        Self::from_files(paths)
    }
}

fn device_for(path: &Path) -> Result<CameraDevice, CaptureError> {
    let file_name = path
        .file_name()
        .ok_or_else(|| CaptureError::DeviceUnavailable(format!("not a file: {:?}", path)))?
        .to_string_lossy()
        .into_owned();
    let label = path
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| file_name.clone());
    Ok(CameraDevice {
        id: file_name,
        label,
    })
}

impl FrameSource for StillImageCamera {
    fn devices(&self) -> Result<Vec<CameraDevice>, CaptureError> {
        Ok(self.devices.iter().map(|(d, _)| d.clone()).collect())
    }

    fn bind(&mut self, device_id: &str) -> Result<(), CaptureError> {
        match self.devices.iter().position(|(d, _)| d.id == device_id) {
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
        self.bound.map(|i| &self.devices[i].0)
    }

    fn snapshot(&mut self) -> Result<Vec<u8>, CaptureError> {
        let index = self
            .bound
            .ok_or_else(|| CaptureError::DeviceUnavailable("no camera device bound".into()))?;
        let (device, path) = &self.devices[index];
        log::debug!("snapshot from device {} ({:?})", device.id, path);
        fs::read(path)
            .map_err(|e| CaptureError::DeviceUnavailable(format!("cannot read {:?}: {}", path, e)))
    }
}
