pub mod catalog;
pub mod error;
pub mod event;
pub mod mood;
pub mod transcript;

pub use catalog::{MeditationTip, MoodTheme, Rgb, Track};
pub use catalog::{theme_for, tips_for, tracks_for};
pub use error::{MoodSyncError, Result};
pub use event::WellnessEvent;
pub use mood::Mood;
pub use transcript::{ChatMessage, Sender, Transcript};
