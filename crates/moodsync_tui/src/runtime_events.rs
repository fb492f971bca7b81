//! Map [moodsync_core::WellnessEvent] and [crate::auth_flow::AuthOutcome]
//! to [TuiState] updates.

use moodsync_core::{Sender, WellnessEvent};

use crate::auth_flow::AuthOutcome;
use crate::state::{Screen, TuiState};

/// Apply an engine event to TUI state.
pub fn apply_wellness_event(state: &mut TuiState, event: WellnessEvent) {
    state.needs_redraw = true;
    match event {
        WellnessEvent::CameraStarted => {
            state.camera_on = true;
        }
        WellnessEvent::CameraStopped => {
            state.camera_on = false;
        }
        WellnessEvent::AnalysisStarted => {
            state.analyzing = true;
        }
        WellnessEvent::MoodDetected { mood } => {
            state.analyzing = false;
            state.mood = Some(mood);
            // Playlist rebuilt around the new mood; clock restarts at the top.
            state.track_index = 0;
            state.position_secs = 0;
            state.set_status(format!("Current mood: {mood}"));
        }
        WellnessEvent::PlaybackState { playing } => {
            state.playing = playing;
        }
        WellnessEvent::PlaybackTick {
            track_index,
            position_secs,
        } => {
            state.track_index = track_index;
            state.position_secs = position_secs;
        }
        WellnessEvent::TrackChanged { track_index } => {
            state.track_index = track_index;
            state.position_secs = 0;
        }
        WellnessEvent::VolumeChanged { volume } => {
            state.volume = volume;
        }
        WellnessEvent::BreathingState { active } => {
            state.breathing = active;
            if !active {
                state.breath_count = 0;
            }
        }
        WellnessEvent::BreathTick { count } => {
            state.breath_count = count;
        }
        WellnessEvent::ChatPending => {
            state.typing = true;
        }
        WellnessEvent::ChatMessage { message } => {
            if message.sender == Sender::Bot {
                state.typing = false;
            }
            state.push_message(message);
        }
        WellnessEvent::Status { message } => {
            state.set_status(message);
        }
        WellnessEvent::Error { error } => {
            state.set_status(error);
        }
    }
}

/// Apply an auth task outcome to TUI state.
pub fn apply_auth_outcome(state: &mut TuiState, outcome: AuthOutcome) {
    state.needs_redraw = true;
    match outcome {
        AuthOutcome::LoggedIn => {
            state.login_busy = false;
            state.login_message = None;
            state.login_password.clear();
            state.screen = Screen::Main;
            state.set_status("Login successful!");
        }
        AuthOutcome::Failed(message) => {
            state.login_busy = false;
            state.login_message = Some(message);
        }
        AuthOutcome::LoggedOut => {
            state.login_busy = false;
            state.login_password.clear();
            state.screen = Screen::Login;
            state.set_status("Logged out");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use moodsync_core::{ChatMessage, Mood};

    #[test]
    fn test_mood_detected_resets_clock_display() {
        let mut state = TuiState::new(Screen::Main);
        state.track_index = 3;
        state.position_secs = 42;
        apply_wellness_event(&mut state, WellnessEvent::mood_detected(Mood::Energetic));
        assert_eq!(state.mood, Some(Mood::Energetic));
        assert_eq!(state.track_index, 0);
        assert_eq!(state.position_secs, 0);
        assert!(!state.analyzing);
    }

    #[test]
    fn test_bot_message_clears_typing() {
        let mut state = TuiState::new(Screen::Main);
        apply_wellness_event(&mut state, WellnessEvent::ChatPending);
        assert!(state.typing);
        apply_wellness_event(
            &mut state,
            WellnessEvent::chat_message(ChatMessage::bot("hello")),
        );
        assert!(!state.typing);
        assert_eq!(state.messages.len(), 1);
    }

    #[test]
    fn test_breathing_stop_resets_count() {
        let mut state = TuiState::new(Screen::Main);
        apply_wellness_event(&mut state, WellnessEvent::breathing_state(true));
        apply_wellness_event(&mut state, WellnessEvent::breath_tick(5));
        assert_eq!(state.breath_count, 5);
        apply_wellness_event(&mut state, WellnessEvent::breathing_state(false));
        assert_eq!(state.breath_count, 0);
    }

    #[test]
    fn test_failed_login_shows_message_verbatim() {
        let mut state = TuiState::new(Screen::Login);
        state.login_busy = true;
        apply_auth_outcome(
            &mut state,
            AuthOutcome::Failed("Invalid email or password".to_string()),
        );
        assert_eq!(
            state.login_message.as_deref(),
            Some("Invalid email or password")
        );
        assert_eq!(state.screen, Screen::Login);
        assert!(!state.login_busy);
    }

    #[test]
    fn test_login_and_logout_switch_screens() {
        let mut state = TuiState::new(Screen::Login);
        apply_auth_outcome(&mut state, AuthOutcome::LoggedIn);
        assert_eq!(state.screen, Screen::Main);
        apply_auth_outcome(&mut state, AuthOutcome::LoggedOut);
        assert_eq!(state.screen, Screen::Login);
    }
}
