//! Application metadata constants

pub const NAME: &str = "moodsync";
pub const DISPLAY_NAME: &str = "MoodSync";
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const DESCRIPTION: &str = "AI-powered wellness companion";
pub const TAGLINE: &str =
    "Detect your mood, enjoy personalized music, discover meditation techniques";

/// Directory name for moodsync data within the home directory
pub const DATA_DIR: &str = ".moodsync";
/// Session token file within DATA_DIR
pub const TOKEN_FILE: &str = "token";
/// Env file within DATA_DIR (API keys, auth URL)
pub const ENV_FILE: &str = "env";
