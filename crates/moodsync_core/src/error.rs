use thiserror::Error;

#[derive(Error, Debug)]
pub enum MoodSyncError {
    #[error("auth error: {0}")]
    Auth(String),

    #[error("chat error: {0}")]
    Chat(String),

    #[error("playback error: {0}")]
    Playback(String),

    #[error("detector error: {0}")]
    Detector(String),

    #[error("config error: {0}")]
    Config(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, MoodSyncError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_error() {
        let err = MoodSyncError::Auth("invalid email or password".to_string());
        assert_eq!(err.to_string(), "auth error: invalid email or password");
    }

    #[test]
    fn test_chat_error() {
        let err = MoodSyncError::Chat("relay failed".to_string());
        assert_eq!(err.to_string(), "chat error: relay failed");
    }

    #[test]
    fn test_detector_error() {
        let err = MoodSyncError::Detector("camera not active".to_string());
        assert_eq!(err.to_string(), "detector error: camera not active");
    }

    #[test]
    fn test_config_error() {
        let err = MoodSyncError::Config("missing base url".to_string());
        assert_eq!(err.to_string(), "config error: missing base url");
    }

    #[test]
    fn test_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "token file not found");
        let err = MoodSyncError::from(io_err);
        assert!(err.to_string().contains("token file not found"));
    }

    #[test]
    fn test_json_error() {
        let json_err = serde_json::from_str::<serde_json::Value>("not json");
        let err = MoodSyncError::from(json_err.unwrap_err());
        assert!(err.to_string().contains("expected value"));
    }
}
