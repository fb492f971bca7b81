//! Engine configuration.

use std::str::FromStr;
use std::time::Duration;

use moodsync_constant::timing;

/// Chat provider selection. The relay itself is built by the caller; the
/// engine only carries the relay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChatProviderKind {
    #[default]
    Groq,
    Gemini,
}

impl ChatProviderKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChatProviderKind::Groq => "groq",
            ChatProviderKind::Gemini => "gemini",
        }
    }
}

impl FromStr for ChatProviderKind {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "groq" => Ok(ChatProviderKind::Groq),
            "gemini" => Ok(ChatProviderKind::Gemini),
            _ => Err(()),
        }
    }
}

impl std::fmt::Display for ChatProviderKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Engine configuration. Defaults mirror the original UI timings.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Simulated analysis delay before a mood is emitted
    pub detector_delay: Duration,
    /// Playback position advances once per tick
    pub playback_tick: Duration,
    /// One breathing cycle per tick
    pub breath_cycle: Duration,
    /// Volume change per step command
    pub volume_step: u8,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            detector_delay: Duration::from_millis(timing::MOOD_ANALYSIS_DELAY_MS),
            playback_tick: Duration::from_millis(timing::PLAYBACK_TICK_MS),
            breath_cycle: Duration::from_millis(timing::BREATH_CYCLE_MS),
            volume_step: 5,
        }
    }
}

impl EngineConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_detector_delay(mut self, delay: Duration) -> Self {
        self.detector_delay = delay;
        self
    }

    pub fn with_playback_tick(mut self, tick: Duration) -> Self {
        self.playback_tick = tick;
        self
    }

    pub fn with_breath_cycle(mut self, cycle: Duration) -> Self {
        self.breath_cycle = cycle;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_original_timings() {
        let config = EngineConfig::default();
        assert_eq!(config.detector_delay, Duration::from_millis(2000));
        assert_eq!(config.playback_tick, Duration::from_millis(1000));
        assert_eq!(config.breath_cycle, Duration::from_millis(4000));
    }

    #[test]
    fn test_provider_kind_parses() {
        assert_eq!(
            "groq".parse::<ChatProviderKind>().unwrap(),
            ChatProviderKind::Groq
        );
        assert_eq!(
            "Gemini".parse::<ChatProviderKind>().unwrap(),
            ChatProviderKind::Gemini
        );
        assert!("llama".parse::<ChatProviderKind>().is_err());
    }
}
