//! Simulated playback clock over the mood playlist.
//!
//! No audio is decoded; the clock is a pure state machine advanced one
//! second per tick by the engine's interval. A real audio clock could drive
//! the same machine. For a track of duration D, exactly D ticks advance the
//! active track (wrapping past the last index) and reset the position.

use moodsync_core::{catalog, Mood, Track};
use moodsync_constant::timing;

/// What a tick changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackUpdate {
    /// Position moved within the current track.
    Position(u32),
    /// The clock advanced to the track at this index (position reset to 0).
    Advanced(usize),
}

#[derive(Debug, Clone)]
pub struct PlaybackClock {
    playlist: Vec<&'static Track>,
    track_index: usize,
    position_secs: u32,
    volume: u8,
    playing: bool,
}

impl PlaybackClock {
    /// Clock over the playlist for `mood` (Calm when unset).
    pub fn new(mood: Option<Mood>) -> Self {
        Self::from_playlist(catalog::tracks_for(mood))
    }

    /// Clock over an explicit playlist. Selectors guarantee at least one
    /// entry; an empty playlist simply never advances.
    pub fn from_playlist(playlist: Vec<&'static Track>) -> Self {
        Self {
            playlist,
            track_index: 0,
            position_secs: 0,
            volume: timing::DEFAULT_VOLUME,
            playing: false,
        }
    }

    /// Swap to the playlist for `mood`; index and position reset, the
    /// playing flag is kept.
    pub fn set_mood(&mut self, mood: Option<Mood>) {
        self.playlist = catalog::tracks_for(mood);
        self.track_index = 0;
        self.position_secs = 0;
    }

    pub fn playlist(&self) -> &[&'static Track] {
        &self.playlist
    }

    pub fn current_track(&self) -> Option<&'static Track> {
        self.playlist.get(self.track_index).copied()
    }

    pub fn track_index(&self) -> usize {
        self.track_index
    }

    pub fn position_secs(&self) -> u32 {
        self.position_secs
    }

    pub fn volume(&self) -> u8 {
        self.volume
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    /// Flip the playing state; returns the new state.
    pub fn toggle(&mut self) -> bool {
        self.playing = !self.playing;
        self.playing
    }

    pub fn stop(&mut self) {
        self.playing = false;
    }

    /// Skip forward, wrapping past the last index. Resets position.
    pub fn next_track(&mut self) -> usize {
        if !self.playlist.is_empty() {
            self.track_index = (self.track_index + 1) % self.playlist.len();
        }
        self.position_secs = 0;
        self.track_index
    }

    /// Skip backward, wrapping from the first index to the last. Resets position.
    pub fn previous_track(&mut self) -> usize {
        if !self.playlist.is_empty() {
            self.track_index = if self.track_index == 0 {
                self.playlist.len() - 1
            } else {
                self.track_index - 1
            };
        }
        self.position_secs = 0;
        self.track_index
    }

    pub fn volume_up(&mut self, step: u8) -> u8 {
        self.volume = self.volume.saturating_add(step).min(100);
        self.volume
    }

    pub fn volume_down(&mut self, step: u8) -> u8 {
        self.volume = self.volume.saturating_sub(step);
        self.volume
    }

    /// Advance one second. `None` when paused or the playlist is empty.
    pub fn tick(&mut self) -> Option<PlaybackUpdate> {
        if !self.playing {
            return None;
        }
        let track = self.current_track()?;
        self.position_secs += 1;
        if self.position_secs >= track.duration_secs {
            let index = self.next_track();
            Some(PlaybackUpdate::Advanced(index))
        } else {
            Some(PlaybackUpdate::Position(self.position_secs))
        }
    }
}

/// "m:ss" display, as the original player formats it.
pub fn format_time(secs: u32) -> String {
    format!("{}:{:02}", secs / 60, secs % 60)
}

#[cfg(test)]
mod tests {
    use super::*;
    use moodsync_core::catalog::TRACKS;

    fn full_clock() -> PlaybackClock {
        PlaybackClock::from_playlist(TRACKS.iter().collect())
    }

    #[test]
    fn test_duration_ticks_advance_track() {
        let mut clock = full_clock();
        clock.toggle();
        let duration = clock.current_track().unwrap().duration_secs;
        for i in 1..duration {
            assert_eq!(clock.tick(), Some(PlaybackUpdate::Position(i)));
        }
        assert_eq!(clock.tick(), Some(PlaybackUpdate::Advanced(1)));
        assert_eq!(clock.position_secs(), 0);
    }

    #[test]
    fn test_advance_wraps_past_last_index() {
        let mut clock = full_clock();
        clock.toggle();
        for _ in 0..TRACKS.len() - 1 {
            clock.next_track();
        }
        assert_eq!(clock.track_index(), TRACKS.len() - 1);
        let duration = clock.current_track().unwrap().duration_secs;
        for _ in 1..duration {
            clock.tick();
        }
        assert_eq!(clock.tick(), Some(PlaybackUpdate::Advanced(0)));
    }

    #[test]
    fn test_previous_from_zero_wraps_to_last() {
        let mut clock = full_clock();
        assert_eq!(clock.previous_track(), TRACKS.len() - 1);
    }

    #[test]
    fn test_paused_clock_does_not_tick() {
        let mut clock = full_clock();
        assert_eq!(clock.tick(), None);
        assert_eq!(clock.position_secs(), 0);
    }

    #[test]
    fn test_set_mood_rebuilds_and_resets() {
        let mut clock = full_clock();
        clock.toggle();
        clock.tick();
        clock.next_track();
        clock.set_mood(Some(Mood::Energetic));
        assert_eq!(clock.track_index(), 0);
        assert_eq!(clock.position_secs(), 0);
        assert!(clock.is_playing());
        assert!(clock.playlist().iter().all(|t| t.mood == Mood::Energetic));
    }

    #[test]
    fn test_unset_mood_playlist_is_calm_default() {
        let clock = PlaybackClock::new(None);
        assert_eq!(clock.current_track().unwrap().title, "Sunrise Meditation");
    }

    #[test]
    fn test_volume_clamps() {
        let mut clock = full_clock();
        assert_eq!(clock.volume(), 70);
        for _ in 0..10 {
            clock.volume_up(5);
        }
        assert_eq!(clock.volume(), 100);
        for _ in 0..25 {
            clock.volume_down(5);
        }
        assert_eq!(clock.volume(), 0);
    }

    #[test]
    fn test_format_time() {
        assert_eq!(format_time(0), "0:00");
        assert_eq!(format_time(65), "1:05");
        assert_eq!(format_time(300), "5:00");
    }
}
