//! Static content catalogs and the mood-to-content selectors.
//!
//! Catalog entries are immutable for the process lifetime; selectors filter on
//! the `mood` field in declaration order. When no mood is set (or a mood has
//! no matching entry) every selector falls back to its Calm entry — one
//! documented default, applied uniformly.

use serde::Serialize;

use crate::mood::Mood;

/// RGB triplet. Portable (u8) for TUI, CLI, or UI color APIs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Rgb(r, g, b)
    }

    /// Tuple for ratatui/crossterm: `(r, g, b)`.
    pub fn tuple(self) -> (u8, u8, u8) {
        (self.0, self.1, self.2)
    }
}

impl From<Rgb> for (u8, u8, u8) {
    fn from(c: Rgb) -> Self {
        c.tuple()
    }
}

/// A guided meditation exercise tagged with the mood it suits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MeditationTip {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub instruction: &'static str,
    pub duration: &'static str,
    pub mood: Mood,
}

/// A curated track tagged with the mood it suits. No audio data — the player
/// is a simulated timeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Track {
    pub id: &'static str,
    pub title: &'static str,
    pub artist: &'static str,
    pub mood: Mood,
    pub duration_secs: u32,
}

/// Gradient color pair for a mood.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MoodTheme {
    pub mood: Mood,
    pub from: Rgb,
    pub to: Rgb,
}

pub static MEDITATION_TIPS: [MeditationTip; 5] = [
    MeditationTip {
        id: "1",
        title: "Joyful Gratitude",
        description: "Amplify your happiness with gratitude practice",
        instruction: "Think of three things you're grateful for right now. Hold each thought \
                      for 30 seconds and feel the warmth in your heart.",
        duration: "2 minutes",
        mood: Mood::Happy,
    },
    MeditationTip {
        id: "2",
        title: "Ocean Breathing",
        description: "Deepen your calm with rhythmic breathing",
        instruction: "Breathe in for 4 counts, hold for 4, exhale for 6. Imagine waves washing \
                      over you with each breath.",
        duration: "5 minutes",
        mood: Mood::Calm,
    },
    MeditationTip {
        id: "3",
        title: "Mindful Focus",
        description: "Sharpen your concentration with single-point meditation",
        instruction: "Choose a single object or word. When your mind wanders, gently return to \
                      your chosen focus point.",
        duration: "10 minutes",
        mood: Mood::Focused,
    },
    MeditationTip {
        id: "4",
        title: "Energy Flow",
        description: "Channel your energy with movement meditation",
        instruction: "Stand tall, imagine energy flowing from earth through your body to sky. \
                      Move slowly with intention.",
        duration: "3 minutes",
        mood: Mood::Energetic,
    },
    MeditationTip {
        id: "5",
        title: "Body Scan",
        description: "Release tension and deepen relaxation",
        instruction: "Start from your toes and slowly scan up your body, releasing tension in \
                      each part you focus on.",
        duration: "8 minutes",
        mood: Mood::Relaxed,
    },
];

pub static TRACKS: [Track; 5] = [
    Track {
        id: "1",
        title: "Sunrise Meditation",
        artist: "Nature Sounds",
        mood: Mood::Calm,
        duration_secs: 180,
    },
    Track {
        id: "2",
        title: "Ocean Waves",
        artist: "Peaceful Mind",
        mood: Mood::Relaxed,
        duration_secs: 240,
    },
    Track {
        id: "3",
        title: "Uplifting Journey",
        artist: "Joyful Beats",
        mood: Mood::Happy,
        duration_secs: 200,
    },
    Track {
        id: "4",
        title: "Focus Flow",
        artist: "Deep Work",
        mood: Mood::Focused,
        duration_secs: 300,
    },
    Track {
        id: "5",
        title: "Energy Boost",
        artist: "Active Life",
        mood: Mood::Energetic,
        duration_secs: 180,
    },
];

pub static MOOD_THEMES: [MoodTheme; 5] = [
    MoodTheme {
        mood: Mood::Happy,
        from: Rgb::new(250, 204, 21),
        to: Rgb::new(251, 146, 60),
    },
    MoodTheme {
        mood: Mood::Calm,
        from: Rgb::new(96, 165, 250),
        to: Rgb::new(34, 211, 238),
    },
    MoodTheme {
        mood: Mood::Focused,
        from: Rgb::new(192, 132, 252),
        to: Rgb::new(129, 140, 248),
    },
    MoodTheme {
        mood: Mood::Energetic,
        from: Rgb::new(251, 146, 60),
        to: Rgb::new(248, 113, 113),
    },
    MoodTheme {
        mood: Mood::Relaxed,
        from: Rgb::new(74, 222, 128),
        to: Rgb::new(52, 211, 153),
    },
];

fn fallback<T>(catalog: &'static [T], mood_of: impl Fn(&T) -> Mood) -> &'static T {
    catalog
        .iter()
        .find(|entry| mood_of(entry) == Mood::DEFAULT)
        .unwrap_or(&catalog[0])
}

/// Meditation tips matching `mood`, in declaration order. Unset or unmatched
/// mood yields the Calm tip.
pub fn tips_for(mood: Option<Mood>) -> Vec<&'static MeditationTip> {
    select(&MEDITATION_TIPS, mood, |tip| tip.mood)
}

/// Tracks matching `mood`, in declaration order. Unset or unmatched mood
/// yields the Calm track.
pub fn tracks_for(mood: Option<Mood>) -> Vec<&'static Track> {
    select(&TRACKS, mood, |track| track.mood)
}

/// Gradient theme for `mood`; Calm when unset.
pub fn theme_for(mood: Option<Mood>) -> &'static MoodTheme {
    let mood = mood.unwrap_or(Mood::DEFAULT);
    MOOD_THEMES
        .iter()
        .find(|theme| theme.mood == mood)
        .unwrap_or_else(|| fallback(&MOOD_THEMES, |theme| theme.mood))
}

fn select<T>(
    catalog: &'static [T],
    mood: Option<Mood>,
    mood_of: impl Fn(&T) -> Mood + Copy,
) -> Vec<&'static T> {
    match mood {
        Some(mood) => {
            let matches: Vec<&'static T> = catalog
                .iter()
                .filter(|entry| mood_of(entry) == mood)
                .collect();
            if matches.is_empty() {
                vec![fallback(catalog, mood_of)]
            } else {
                matches
            }
        }
        None => vec![fallback(catalog, mood_of)],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_mood_has_a_tip() {
        for mood in Mood::ALL {
            let tips = tips_for(Some(mood));
            assert!(!tips.is_empty());
            assert!(tips.iter().all(|tip| tip.mood == mood));
        }
    }

    #[test]
    fn test_every_mood_has_a_track() {
        for mood in Mood::ALL {
            let tracks = tracks_for(Some(mood));
            assert!(!tracks.is_empty());
            assert!(tracks.iter().all(|track| track.mood == mood));
        }
    }

    #[test]
    fn test_every_mood_has_a_theme() {
        for mood in Mood::ALL {
            assert_eq!(theme_for(Some(mood)).mood, mood);
        }
    }

    #[test]
    fn test_unset_mood_defaults_are_uniform() {
        assert_eq!(tips_for(None)[0].mood, Mood::Calm);
        assert_eq!(tracks_for(None)[0].mood, Mood::Calm);
        assert_eq!(theme_for(None).mood, Mood::Calm);
    }

    #[test]
    fn test_unset_tip_is_ocean_breathing() {
        let tips = tips_for(None);
        assert_eq!(tips.len(), 1);
        assert_eq!(tips[0].title, "Ocean Breathing");
    }

    #[test]
    fn test_unset_track_is_sunrise_meditation() {
        let tracks = tracks_for(None);
        assert_eq!(tracks.len(), 1);
        assert_eq!(tracks[0].title, "Sunrise Meditation");
    }

    #[test]
    fn test_declaration_order_preserved() {
        // Only one entry per mood today, but the selector contract promises
        // catalog order for multi-entry moods.
        let all: Vec<&Track> = Mood::ALL
            .into_iter()
            .flat_map(|m| tracks_for(Some(m)))
            .collect();
        assert_eq!(all.len(), TRACKS.len());
    }

    #[test]
    fn test_theme_gradient_pairs_differ() {
        for theme in &MOOD_THEMES {
            assert_ne!(theme.from, theme.to);
        }
    }
}
