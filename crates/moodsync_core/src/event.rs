use serde::{Deserialize, Serialize};

use crate::mood::Mood;
use crate::transcript::ChatMessage;

/// Events streamed from the wellness engine to the UI.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum WellnessEvent {
    CameraStarted,

    CameraStopped,

    /// Detection began; busy until [WellnessEvent::MoodDetected].
    AnalysisStarted,

    MoodDetected { mood: Mood },

    PlaybackState { playing: bool },

    PlaybackTick { track_index: usize, position_secs: u32 },

    TrackChanged { track_index: usize },

    VolumeChanged { volume: u8 },

    BreathingState { active: bool },

    BreathTick { count: u32 },

    /// The relay call is in flight (typing indicator).
    ChatPending,

    ChatMessage { message: ChatMessage },

    Status { message: String },

    Error { error: String },
}

impl WellnessEvent {
    pub fn mood_detected(mood: Mood) -> Self {
        WellnessEvent::MoodDetected { mood }
    }

    pub fn playback_state(playing: bool) -> Self {
        WellnessEvent::PlaybackState { playing }
    }

    pub fn playback_tick(track_index: usize, position_secs: u32) -> Self {
        WellnessEvent::PlaybackTick {
            track_index,
            position_secs,
        }
    }

    pub fn track_changed(track_index: usize) -> Self {
        WellnessEvent::TrackChanged { track_index }
    }

    pub fn volume_changed(volume: u8) -> Self {
        WellnessEvent::VolumeChanged { volume }
    }

    pub fn breathing_state(active: bool) -> Self {
        WellnessEvent::BreathingState { active }
    }

    pub fn breath_tick(count: u32) -> Self {
        WellnessEvent::BreathTick { count }
    }

    pub fn chat_message(message: ChatMessage) -> Self {
        WellnessEvent::ChatMessage { message }
    }

    pub fn status(message: impl Into<String>) -> Self {
        WellnessEvent::Status {
            message: message.into(),
        }
    }

    pub fn error(error: impl Into<String>) -> Self {
        WellnessEvent::Error {
            error: error.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mood_detected_serde() {
        let event = WellnessEvent::mood_detected(Mood::Happy);
        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains(r#""type":"mood_detected"#));
        assert!(json.contains(r#""mood":"happy"#));
    }

    #[test]
    fn test_playback_tick_serde() {
        let event = WellnessEvent::playback_tick(2, 17);
        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains(r#""type":"playback_tick"#));
        assert!(json.contains(r#""track_index":2"#));
        assert!(json.contains(r#""position_secs":17"#));
    }

    #[test]
    fn test_breath_tick_serde() {
        let event = WellnessEvent::breath_tick(3);
        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains(r#""type":"breath_tick"#));
        assert!(json.contains(r#""count":3"#));
    }

    #[test]
    fn test_status_serde() {
        let event = WellnessEvent::status("start the camera first");
        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains(r#""type":"status"#));
        assert!(json.contains("start the camera first"));
    }

    #[test]
    fn test_all_event_types_roundtrip() {
        let events = vec![
            WellnessEvent::CameraStarted,
            WellnessEvent::CameraStopped,
            WellnessEvent::AnalysisStarted,
            WellnessEvent::mood_detected(Mood::Relaxed),
            WellnessEvent::playback_state(true),
            WellnessEvent::playback_tick(0, 0),
            WellnessEvent::track_changed(1),
            WellnessEvent::volume_changed(70),
            WellnessEvent::breathing_state(false),
            WellnessEvent::breath_tick(0),
            WellnessEvent::ChatPending,
            WellnessEvent::chat_message(ChatMessage::user("hi")),
            WellnessEvent::status("ok"),
            WellnessEvent::error("boom"),
        ];
        for event in events {
            let json = serde_json::to_string(&event).unwrap();
            let decoded: WellnessEvent = serde_json::from_str(&json).unwrap();
            let _ = format!("{:?}", decoded);
        }
    }
}
