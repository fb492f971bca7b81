//! moodsync-wellness — the engine behind the UI.
//!
//! [WellnessEngine] owns the current mood, the simulated playback clock, the
//! breathing counter, the chat transcript, and the mocked detector; it
//! receives [EngineCommand]s and streams [moodsync_core::WellnessEvent]s back.
//! Every timer and in-flight task is bound to one cancellation token, so
//! tearing the engine down cancels pending emissions instead of leaking them.

pub mod breathing;
pub mod camera;
pub mod config;
pub mod detector;
pub mod engine;
pub mod error;
pub mod playback;

pub use breathing::{BreathPhase, BreathingExercise};
pub use camera::{CameraBackend, CameraError, CameraFeed, NoopCamera};
pub use config::EngineConfig;
pub use detector::{MoodDetector, SimulatedDetector};
pub use engine::{EngineCommand, WellnessEngine};
pub use error::EngineError;
pub use playback::{format_time, PlaybackClock, PlaybackUpdate};
