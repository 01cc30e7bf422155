//! Background image decoding
//!
//! The frame loop keeps running while the photo decodes on a worker thread;
//! it polls once per frame and only starts compositing after the image lands.

use image::RgbaImage;
use pinkboard_core::{PinkboardError, Result};
use std::path::{Path, PathBuf};
use std::sync::mpsc::{self, Receiver, TryRecvError};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoadState {
    Pending,
    Complete,
    Failed,
}

/// One image decoding off-thread. The result is handed out exactly once.
pub struct ImageLoader {
    path: PathBuf,
    rx: Option<Receiver<Result<RgbaImage>>>,
    state: LoadState,
}

impl ImageLoader {
    pub fn spawn(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let (tx, rx) = mpsc::channel();
        let worker_path = path.clone();
        std::thread::spawn(move || {
            let _ = tx.send(decode(&worker_path));
        });
        Self {
            path,
            rx: Some(rx),
            state: LoadState::Pending,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn state(&self) -> LoadState {
        self.state
    }

    pub fn is_complete(&self) -> bool {
        self.state == LoadState::Complete
    }

    /// Non-blocking check. Returns the result the first time it is available,
    /// `None` while still decoding or after it was already taken.
    pub fn poll(&mut self) -> Option<Result<RgbaImage>> {
        let rx = self.rx.as_ref()?;
        let result = match rx.try_recv() {
            Ok(result) => result,
            Err(TryRecvError::Empty) => return None,
            Err(TryRecvError::Disconnected) => Err(PinkboardError::ImageError(format!(
                "loader for '{}' exited without a result",
                self.path.display()
            ))),
        };
        Some(self.finish(result))
    }

    /// Block until the image is decoded
    pub fn wait(&mut self) -> Result<RgbaImage> {
        let rx = self.rx.as_ref().ok_or_else(|| {
            PinkboardError::ImageError(format!("'{}' was already taken", self.path.display()))
        })?;
        let result = rx.recv().unwrap_or_else(|_| {
            Err(PinkboardError::ImageError(format!(
                "loader for '{}' exited without a result",
                self.path.display()
            )))
        });
        self.finish(result)
    }

    fn finish(&mut self, result: Result<RgbaImage>) -> Result<RgbaImage> {
        self.rx = None;
        match &result {
            Ok(img) => {
                self.state = LoadState::Complete;
                log::info!(
                    "Loaded {} ({}x{})",
                    self.path.display(),
                    img.width(),
                    img.height()
                );
            }
            Err(e) => {
                self.state = LoadState::Failed;
                log::warn!("{e}");
            }
        }
        result
    }
}

/// Decode any format the image crate understands into RGBA8
pub fn decode(path: &Path) -> Result<RgbaImage> {
    let img = image::open(path).map_err(|e| {
        PinkboardError::ImageError(format!("Failed to open image '{}': {}", path.display(), e))
    })?;
    Ok(img.to_rgba8())
}
