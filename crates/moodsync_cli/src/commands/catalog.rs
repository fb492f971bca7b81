//! Print the content catalogs. Without `--mood` the full catalogs are shown;
//! with it, the selector's view (including the Calm default for unmatched).

use std::str::FromStr;

use moodsync_core::catalog::{MEDITATION_TIPS, MOOD_THEMES, TRACKS};
use moodsync_core::{catalog, Mood, Rgb};
use moodsync_wellness::format_time;

use crate::output;

fn hex(rgb: Rgb) -> String {
    format!("#{:02x}{:02x}{:02x}", rgb.0, rgb.1, rgb.2)
}

pub fn run(mood: Option<String>) -> anyhow::Result<()> {
    let mood = match mood {
        Some(raw) => Some(Mood::from_str(&raw).map_err(|e| anyhow::anyhow!(e.to_string()))?),
        None => None,
    };

    output::header("Meditation tips");
    let tips: Vec<&moodsync_core::MeditationTip> = match mood {
        Some(_) => catalog::tips_for(mood),
        None => MEDITATION_TIPS.iter().collect(),
    };
    output::table(
        &["Mood", "Title", "Duration", "Description"],
        tips.iter()
            .map(|tip| {
                vec![
                    tip.mood.to_string(),
                    tip.title.to_string(),
                    tip.duration.to_string(),
                    tip.description.to_string(),
                ]
            })
            .collect(),
    );

    output::header("Tracks");
    let tracks: Vec<&moodsync_core::Track> = match mood {
        Some(_) => catalog::tracks_for(mood),
        None => TRACKS.iter().collect(),
    };
    output::table(
        &["Mood", "Title", "Artist", "Length"],
        tracks
            .iter()
            .map(|track| {
                vec![
                    track.mood.to_string(),
                    track.title.to_string(),
                    track.artist.to_string(),
                    format_time(track.duration_secs),
                ]
            })
            .collect(),
    );

    output::header("Themes");
    let themes: Vec<&moodsync_core::MoodTheme> = match mood {
        Some(_) => vec![catalog::theme_for(mood)],
        None => MOOD_THEMES.iter().collect(),
    };
    output::table(
        &["Mood", "From", "To"],
        themes
            .iter()
            .map(|theme| vec![theme.mood.to_string(), hex(theme.from), hex(theme.to)])
            .collect(),
    );

    Ok(())
}
