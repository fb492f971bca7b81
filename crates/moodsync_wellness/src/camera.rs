//! Camera feed: start/stop state over a backend seam. Frames are never
//! captured or analyzed; detection only requires the feed to be active.

use std::sync::Arc;

use thiserror::Error;
use tracing::warn;

#[derive(Error, Debug)]
pub enum CameraError {
    #[error("camera permission denied")]
    PermissionDenied,

    #[error("camera unavailable: {0}")]
    Unavailable(String),
}

/// A capture device. The shipped backend is a no-op; a real device would
/// satisfy the same trait.
pub trait CameraBackend: Send + Sync {
    fn open(&self) -> Result<(), CameraError>;
    fn close(&self);
}

/// Backend that always opens. Stands in for a granted capture device.
pub struct NoopCamera;

impl CameraBackend for NoopCamera {
    fn open(&self) -> Result<(), CameraError> {
        Ok(())
    }

    fn close(&self) {}
}

/// Start/stop wrapper around a backend. Permission denial is logged only and
/// leaves the feed inactive — no user-facing message.
#[derive(Clone)]
pub struct CameraFeed {
    backend: Arc<dyn CameraBackend>,
    streaming: bool,
}

impl CameraFeed {
    pub fn new(backend: Arc<dyn CameraBackend>) -> Self {
        Self {
            backend,
            streaming: false,
        }
    }

    pub fn is_streaming(&self) -> bool {
        self.streaming
    }

    /// Open the backend. Returns whether the feed is now streaming.
    pub fn start(&mut self) -> bool {
        match self.backend.open() {
            Ok(()) => {
                self.streaming = true;
            }
            Err(error) => {
                warn!(%error, "error accessing camera");
            }
        }
        self.streaming
    }

    pub fn stop(&mut self) {
        if self.streaming {
            self.backend.close();
            self.streaming = false;
        }
    }
}

impl Default for CameraFeed {
    fn default() -> Self {
        Self::new(Arc::new(NoopCamera))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct DeniedCamera;

    impl CameraBackend for DeniedCamera {
        fn open(&self) -> Result<(), CameraError> {
            Err(CameraError::PermissionDenied)
        }

        fn close(&self) {}
    }

    #[test]
    fn test_noop_camera_starts_and_stops() {
        let mut feed = CameraFeed::default();
        assert!(!feed.is_streaming());
        assert!(feed.start());
        assert!(feed.is_streaming());
        feed.stop();
        assert!(!feed.is_streaming());
    }

    #[test]
    fn test_denied_camera_stays_inactive() {
        let mut feed = CameraFeed::new(Arc::new(DeniedCamera));
        assert!(!feed.start());
        assert!(!feed.is_streaming());
    }
}
