//! Engine behavior end to end: commands in, events out, cancellation on
//! teardown.
//!
//! Run with: cargo test -p moodsync-wellness --test engine_test

use std::time::Duration;

use async_trait::async_trait;
use moodsync_core::{Mood, Sender, WellnessEvent};
use moodsync_llms::{ChatProvider, ChatRelay};
use moodsync_wellness::{EngineCommand, EngineConfig, WellnessEngine};
use tokio::sync::mpsc;
use tokio::time::timeout;

struct EchoProvider;

#[async_trait]
impl ChatProvider for EchoProvider {
    fn provider_id(&self) -> &str {
        "echo"
    }

    fn model(&self) -> &str {
        "echo-model"
    }

    fn fallback_text(&self) -> &'static str {
        "echo fallback"
    }

    async fn complete(&self, input: &str) -> moodsync_llms::Result<String> {
        Ok(format!("echo: {input}"))
    }
}

fn fast_config() -> EngineConfig {
    EngineConfig::new()
        .with_detector_delay(Duration::from_millis(20))
        .with_playback_tick(Duration::from_millis(10))
        .with_breath_cycle(Duration::from_millis(10))
}

struct Harness {
    commands: mpsc::Sender<EngineCommand>,
    events: mpsc::Receiver<WellnessEvent>,
}

fn spawn_engine(config: EngineConfig) -> Harness {
    let (event_tx, events) = mpsc::channel(64);
    let (commands, command_rx) = mpsc::channel(16);
    let engine = WellnessEngine::new(config, ChatRelay::new(EchoProvider), event_tx);
    tokio::spawn(engine.run(command_rx));
    Harness { commands, events }
}

impl Harness {
    async fn next_event(&mut self) -> WellnessEvent {
        timeout(Duration::from_secs(2), self.events.recv())
            .await
            .expect("timed out waiting for event")
            .expect("event channel closed")
    }

    /// Skip timer noise until an event matches.
    async fn wait_for(&mut self, matches: impl Fn(&WellnessEvent) -> bool) -> WellnessEvent {
        loop {
            let event = self.next_event().await;
            if matches(&event) {
                return event;
            }
        }
    }
}

#[tokio::test]
async fn test_detection_emits_started_then_mood() {
    let mut harness = spawn_engine(fast_config());
    harness
        .commands
        .send(EngineCommand::StartCamera)
        .await
        .unwrap();
    harness.commands.send(EngineCommand::DetectMood).await.unwrap();

    harness
        .wait_for(|e| matches!(e, WellnessEvent::CameraStarted))
        .await;
    harness
        .wait_for(|e| matches!(e, WellnessEvent::AnalysisStarted))
        .await;
    let event = harness
        .wait_for(|e| matches!(e, WellnessEvent::MoodDetected { .. }))
        .await;
    if let WellnessEvent::MoodDetected { mood } = event {
        assert!(Mood::ALL.contains(&mood));
    }
}

#[tokio::test]
async fn test_detection_requires_camera() {
    let mut harness = spawn_engine(fast_config());
    harness.commands.send(EngineCommand::DetectMood).await.unwrap();

    let event = harness
        .wait_for(|e| matches!(e, WellnessEvent::Status { .. }))
        .await;
    if let WellnessEvent::Status { message } = event {
        assert_eq!(message, "Start the camera first");
    }
}

#[tokio::test]
async fn test_chat_roundtrip_through_relay() {
    let mut harness = spawn_engine(fast_config());
    harness
        .commands
        .send(EngineCommand::SendChat("I'm feeling stressed today".to_string()))
        .await
        .unwrap();

    let user = harness
        .wait_for(|e| matches!(e, WellnessEvent::ChatMessage { .. }))
        .await;
    if let WellnessEvent::ChatMessage { message } = user {
        assert_eq!(message.sender, Sender::User);
        assert_eq!(message.text, "I'm feeling stressed today");
    }
    harness
        .wait_for(|e| matches!(e, WellnessEvent::ChatPending))
        .await;
    let bot = harness
        .wait_for(|e| matches!(e, WellnessEvent::ChatMessage { .. }))
        .await;
    if let WellnessEvent::ChatMessage { message } = bot {
        assert_eq!(message.sender, Sender::Bot);
        assert_eq!(message.text, "echo: I'm feeling stressed today");
    }
}

#[tokio::test]
async fn test_playback_ticks_while_playing() {
    let mut harness = spawn_engine(fast_config());
    harness
        .commands
        .send(EngineCommand::TogglePlayback)
        .await
        .unwrap();

    harness
        .wait_for(|e| matches!(e, WellnessEvent::PlaybackState { playing: true }))
        .await;
    let tick = harness
        .wait_for(|e| matches!(e, WellnessEvent::PlaybackTick { .. }))
        .await;
    if let WellnessEvent::PlaybackTick {
        track_index,
        position_secs,
    } = tick
    {
        assert_eq!(track_index, 0);
        assert!(position_secs >= 1);
    }
}

#[tokio::test]
async fn test_breathing_counts_and_resets() {
    let mut harness = spawn_engine(fast_config());
    harness
        .commands
        .send(EngineCommand::ToggleBreathing)
        .await
        .unwrap();

    harness
        .wait_for(|e| matches!(e, WellnessEvent::BreathingState { active: true }))
        .await;
    harness
        .wait_for(|e| matches!(e, WellnessEvent::BreathTick { count: 2 }))
        .await;

    harness
        .commands
        .send(EngineCommand::ToggleBreathing)
        .await
        .unwrap();
    harness
        .wait_for(|e| matches!(e, WellnessEvent::BreathingState { active: false }))
        .await;
}

#[tokio::test]
async fn test_shutdown_cancels_pending_detection() {
    let config = fast_config().with_detector_delay(Duration::from_millis(500));
    let mut harness = spawn_engine(config);
    harness
        .commands
        .send(EngineCommand::StartCamera)
        .await
        .unwrap();
    harness.commands.send(EngineCommand::DetectMood).await.unwrap();
    harness
        .wait_for(|e| matches!(e, WellnessEvent::AnalysisStarted))
        .await;

    harness.commands.send(EngineCommand::Shutdown).await.unwrap();

    // Drain until the event channel closes; the cancelled detection must not
    // have slipped a MoodDetected through.
    while let Ok(Some(event)) =
        timeout(Duration::from_secs(2), harness.events.recv()).await
    {
        assert!(!matches!(event, WellnessEvent::MoodDetected { .. }));
    }
}

#[tokio::test]
async fn test_track_skip_wraps_backward() {
    let mut harness = spawn_engine(fast_config());
    harness
        .commands
        .send(EngineCommand::PreviousTrack)
        .await
        .unwrap();

    // Unset mood → calm default playlist of one track; wrap lands on 0.
    let event = harness
        .wait_for(|e| matches!(e, WellnessEvent::TrackChanged { .. }))
        .await;
    if let WellnessEvent::TrackChanged { track_index } = event {
        assert_eq!(track_index, 0);
    }
}

#[tokio::test]
async fn test_volume_steps_clamp() {
    let mut harness = spawn_engine(fast_config());
    for _ in 0..8 {
        harness.commands.send(EngineCommand::VolumeUp).await.unwrap();
    }
    let mut last = 0;
    for _ in 0..8 {
        let event = harness
            .wait_for(|e| matches!(e, WellnessEvent::VolumeChanged { .. }))
            .await;
        if let WellnessEvent::VolumeChanged { volume } = event {
            last = volume;
        }
    }
    assert_eq!(last, 100);
}
