//! The wellness engine: command in, event out.
//!
//! One task owns all mutable state. Interval timers (playback, breathing) and
//! spawned work (detection delay, chat relay call) live under a single
//! [CancellationToken]; shutting the engine down cancels pending emissions so
//! a late result never lands on a torn-down view. Updates from one timer
//! chain apply in firing order; nothing is guaranteed across independent
//! components.

use std::sync::Arc;

use moodsync_core::{ChatMessage, Mood, Transcript, WellnessEvent};
use moodsync_llms::ChatRelay;
use tokio::sync::mpsc;
use tokio::time::MissedTickBehavior;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

use crate::breathing::BreathingExercise;
use crate::camera::CameraFeed;
use crate::config::EngineConfig;
use crate::detector::{MoodDetector, SimulatedDetector};
use crate::playback::{PlaybackClock, PlaybackUpdate};

/// Commands the UI sends to the engine.
#[derive(Debug, Clone)]
pub enum EngineCommand {
    StartCamera,
    StopCamera,
    DetectMood,
    TogglePlayback,
    NextTrack,
    PreviousTrack,
    VolumeUp,
    VolumeDown,
    ToggleBreathing,
    SendChat(String),
    Shutdown,
}

/// Results of work spawned off the engine loop.
enum TaskResult {
    MoodReady(moodsync_core::Result<Mood>),
    ChatReply(String),
}

/// The orchestrator. Owns all wellness state; consumed by [WellnessEngine::run].
pub struct WellnessEngine {
    config: EngineConfig,
    mood: Option<Mood>,
    camera: CameraFeed,
    detector: Arc<dyn MoodDetector>,
    playback: PlaybackClock,
    breathing: BreathingExercise,
    transcript: Transcript,
    relay: ChatRelay,
    event_tx: mpsc::Sender<WellnessEvent>,
    cancel: CancellationToken,
    analyzing: bool,
}

impl WellnessEngine {
    pub fn new(
        config: EngineConfig,
        relay: ChatRelay,
        event_tx: mpsc::Sender<WellnessEvent>,
    ) -> Self {
        let detector = Arc::new(SimulatedDetector::new(config.detector_delay));
        Self {
            playback: PlaybackClock::new(None),
            mood: None,
            camera: CameraFeed::default(),
            detector,
            breathing: BreathingExercise::new(),
            transcript: Transcript::new(),
            relay,
            event_tx,
            cancel: CancellationToken::new(),
            analyzing: false,
            config,
        }
    }

    /// Swap in a different detection backend.
    pub fn with_detector(mut self, detector: Arc<dyn MoodDetector>) -> Self {
        self.detector = detector;
        self
    }

    /// Token that tears the engine (and all pending work) down when cancelled.
    pub fn cancel_token(&self) -> CancellationToken {
        self.cancel.clone()
    }

    /// Transcript seeded with the greeting, for the UI's initial render.
    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    /// Run until shutdown. Commands arrive on `commands`; state changes leave
    /// as [WellnessEvent]s on the channel given at construction.
    pub async fn run(mut self, mut commands: mpsc::Receiver<EngineCommand>) {
        let cancel = self.cancel.clone();
        let (task_tx, mut task_rx) = mpsc::channel::<TaskResult>(32);

        let mut playback_timer = tokio::time::interval(self.config.playback_tick);
        let mut breath_timer = tokio::time::interval(self.config.breath_cycle);
        playback_timer.set_missed_tick_behavior(MissedTickBehavior::Skip);
        breath_timer.set_missed_tick_behavior(MissedTickBehavior::Skip);

        info!(provider = %self.relay.provider_id(), "wellness engine started");

        loop {
            tokio::select! {
                _ = cancel.cancelled() => break,
                command = commands.recv() => match command {
                    None | Some(EngineCommand::Shutdown) => {
                        self.cancel.cancel();
                        break;
                    }
                    Some(command) => {
                        self.handle_command(command, &task_tx, &mut playback_timer, &mut breath_timer)
                            .await;
                    }
                },
                Some(result) = task_rx.recv() => {
                    self.handle_task_result(result).await;
                }
                _ = playback_timer.tick() => {
                    if let Some(update) = self.playback.tick() {
                        match update {
                            PlaybackUpdate::Position(position) => {
                                self.emit(WellnessEvent::playback_tick(
                                    self.playback.track_index(),
                                    position,
                                ))
                                .await;
                            }
                            PlaybackUpdate::Advanced(index) => {
                                self.emit(WellnessEvent::track_changed(index)).await;
                            }
                        }
                    }
                }
                _ = breath_timer.tick() => {
                    if let Some(count) = self.breathing.tick() {
                        self.emit(WellnessEvent::breath_tick(count)).await;
                    }
                }
            }
        }
        info!("wellness engine stopped");
    }

    async fn handle_command(
        &mut self,
        command: EngineCommand,
        task_tx: &mpsc::Sender<TaskResult>,
        playback_timer: &mut tokio::time::Interval,
        breath_timer: &mut tokio::time::Interval,
    ) {
        debug!(?command, "engine command");
        match command {
            EngineCommand::StartCamera => {
                if self.camera.start() {
                    self.emit(WellnessEvent::CameraStarted).await;
                }
            }
            EngineCommand::StopCamera => {
                self.camera.stop();
                self.emit(WellnessEvent::CameraStopped).await;
            }
            EngineCommand::DetectMood => self.spawn_detection(task_tx).await,
            EngineCommand::TogglePlayback => {
                let playing = self.playback.toggle();
                if playing {
                    // First position change lands one full tick after play.
                    playback_timer.reset();
                }
                self.emit(WellnessEvent::playback_state(playing)).await;
            }
            EngineCommand::NextTrack => {
                let index = self.playback.next_track();
                self.emit(WellnessEvent::track_changed(index)).await;
            }
            EngineCommand::PreviousTrack => {
                let index = self.playback.previous_track();
                self.emit(WellnessEvent::track_changed(index)).await;
            }
            EngineCommand::VolumeUp => {
                let volume = self.playback.volume_up(self.config.volume_step);
                self.emit(WellnessEvent::volume_changed(volume)).await;
            }
            EngineCommand::VolumeDown => {
                let volume = self.playback.volume_down(self.config.volume_step);
                self.emit(WellnessEvent::volume_changed(volume)).await;
            }
            EngineCommand::ToggleBreathing => {
                let active = self.breathing.toggle();
                if active {
                    breath_timer.reset();
                }
                self.emit(WellnessEvent::breathing_state(active)).await;
            }
            EngineCommand::SendChat(text) => self.spawn_chat(text, task_tx).await,
            // Shutdown is intercepted by the run loop before dispatch.
            EngineCommand::Shutdown => {}
        }
    }

    async fn handle_task_result(&mut self, result: TaskResult) {
        match result {
            TaskResult::MoodReady(result) => {
                self.analyzing = false;
                match result {
                    Ok(mood) => {
                        self.mood = Some(mood);
                        self.playback.set_mood(self.mood);
                        self.emit(WellnessEvent::mood_detected(mood)).await;
                    }
                    Err(error) => {
                        self.emit(WellnessEvent::error(error.to_string())).await;
                    }
                }
            }
            TaskResult::ChatReply(text) => {
                let message = ChatMessage::bot(text);
                self.transcript.push(message.clone());
                self.emit(WellnessEvent::chat_message(message)).await;
            }
        }
    }

    /// Kick off the mocked analysis. Busy until the result lands; cancelled
    /// with the engine.
    async fn spawn_detection(&mut self, task_tx: &mpsc::Sender<TaskResult>) {
        if self.analyzing {
            return;
        }
        if !self.camera.is_streaming() {
            self.emit(WellnessEvent::status("Start the camera first")).await;
            return;
        }
        self.analyzing = true;
        self.emit(WellnessEvent::AnalysisStarted).await;

        let detector = Arc::clone(&self.detector);
        let cancel = self.cancel.child_token();
        let task_tx = task_tx.clone();
        tokio::spawn(async move {
            tokio::select! {
                _ = cancel.cancelled() => {}
                result = detector.detect() => {
                    let _ = task_tx.send(TaskResult::MoodReady(result)).await;
                }
            }
        });
    }

    async fn spawn_chat(&mut self, text: String, task_tx: &mpsc::Sender<TaskResult>) {
        let message = ChatMessage::user(text.clone());
        self.transcript.push(message.clone());
        self.emit(WellnessEvent::chat_message(message)).await;
        self.emit(WellnessEvent::ChatPending).await;

        let relay = self.relay.clone();
        let cancel = self.cancel.child_token();
        let task_tx = task_tx.clone();
        tokio::spawn(async move {
            tokio::select! {
                _ = cancel.cancelled() => {}
                reply = relay.send(&text) => {
                    let _ = task_tx.send(TaskResult::ChatReply(reply)).await;
                }
            }
        });
    }

    async fn emit(&self, event: WellnessEvent) {
        let _ = self.event_tx.send(event).await;
    }
}
