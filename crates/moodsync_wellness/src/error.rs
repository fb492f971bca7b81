//! Error types for the wellness engine.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum EngineError {
    #[error("engine config error: {0}")]
    Config(String),

    #[error("event channel closed: {0}")]
    Channel(String),

    #[error(transparent)]
    Core(#[from] moodsync_core::MoodSyncError),
}
