//! Player photos.
//!
//! There is no camera in a terminal, so a photo is an image file the
//! player points at. The game only ever sees the opaque [`Avatar`] handle.

use impostor::{Avatar, GameError};
use log::warn;
use std::path::{Path, PathBuf};

const IMAGE_EXTENSIONS: [&str; 5] = ["png", "jpg", "jpeg", "gif", "webp"];

pub trait CameraCapture {
    /// Capture a photo. Failing is never fatal: registration carries on
    /// without one.
    fn capture(&mut self, source: &Path) -> Result<Avatar, GameError>;
}

/// Turns readable image files into avatars.
#[derive(Debug, Default)]
pub struct FileCamera {
    base_dir: Option<PathBuf>,
}

impl FileCamera {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve relative paths against `base_dir`.
    pub fn with_base_dir(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: Some(base_dir.into()),
        }
    }

    fn resolve(&self, source: &Path) -> PathBuf {
        match &self.base_dir {
            Some(base) if source.is_relative() => base.join(source),
            _ => source.to_path_buf(),
        }
    }
}

fn is_image(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| IMAGE_EXTENSIONS.contains(&ext.to_lowercase().as_str()))
}

impl CameraCapture for FileCamera {
    fn capture(&mut self, source: &Path) -> Result<Avatar, GameError> {
        let path = self.resolve(source);
        if !is_image(&path) {
            warn!("{} is not an image", path.display());
            return Err(GameError::CameraUnavailable);
        }
        match std::fs::metadata(&path) {
            Ok(meta) if meta.is_file() => Ok(Avatar::new(path.display().to_string())),
            Ok(_) => Err(GameError::CameraUnavailable),
            Err(error) => {
                warn!("couldn't read {}: {error}", path.display());
                Err(GameError::CameraUnavailable)
            }
        }
    }
}
