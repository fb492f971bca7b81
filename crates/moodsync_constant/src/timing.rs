//! Timing defaults for the simulated detector and playback clock.

/// Delay before the simulated mood detector emits a result.
pub const MOOD_ANALYSIS_DELAY_MS: u64 = 2000;
/// Playback position advances one second per tick.
pub const PLAYBACK_TICK_MS: u64 = 1000;
/// One full breathing cycle (in + out).
pub const BREATH_CYCLE_MS: u64 = 4000;
/// Initial volume level (0–100).
pub const DEFAULT_VOLUME: u8 = 70;
