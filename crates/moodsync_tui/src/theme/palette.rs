//! MoodSync palette: semantic color roles (surfaces, borders, text, semantic).

use moodsync_core::{catalog, Mood, Rgb};

use super::Appearance;

/// One full palette for an appearance. All colors are semantic roles.
#[derive(Clone, Debug, PartialEq)]
pub struct MoodPalette {
    // --- Surfaces
    /// App / window background.
    pub background: Rgb,
    /// Panel, card area.
    pub surface_background: Rgb,

    // --- Borders
    pub border: Rgb,
    pub border_focused: Rgb,

    // --- Text
    pub text: Rgb,
    pub text_muted: Rgb,
    pub text_placeholder: Rgb,

    // --- Semantic
    pub accent: Rgb,
    pub danger: Rgb,
    pub success: Rgb,
    pub warning: Rgb,

    // --- UI chrome
    pub status_bar_background: Rgb,
}

impl MoodPalette {
    /// Default dark palette (deep blacks, soft accents).
    pub fn dark() -> Self {
        Self {
            background: Rgb::new(16, 18, 24),
            surface_background: Rgb::new(24, 27, 36),
            border: Rgb::new(52, 58, 74),
            border_focused: Rgb::new(125, 196, 228),
            text: Rgb::new(222, 226, 235),
            text_muted: Rgb::new(140, 148, 166),
            text_placeholder: Rgb::new(96, 104, 122),
            accent: Rgb::new(125, 196, 228),
            danger: Rgb::new(236, 95, 103),
            success: Rgb::new(132, 193, 117),
            warning: Rgb::new(229, 181, 103),
            status_bar_background: Rgb::new(20, 22, 30),
        }
    }

    /// Light palette.
    pub fn light() -> Self {
        Self {
            background: Rgb::new(247, 248, 250),
            surface_background: Rgb::new(255, 255, 255),
            border: Rgb::new(210, 214, 222),
            border_focused: Rgb::new(44, 122, 176),
            text: Rgb::new(32, 36, 44),
            text_muted: Rgb::new(110, 118, 134),
            text_placeholder: Rgb::new(160, 166, 180),
            accent: Rgb::new(44, 122, 176),
            danger: Rgb::new(196, 56, 64),
            success: Rgb::new(64, 148, 74),
            warning: Rgb::new(176, 128, 36),
            status_bar_background: Rgb::new(236, 238, 242),
        }
    }

    pub fn for_appearance(appearance: Appearance) -> Self {
        match appearance {
            Appearance::Dark => Self::dark(),
            Appearance::Light => Self::light(),
        }
    }

    /// Gradient tint for the current mood — the same pair every selector
    /// resolves, via [catalog::theme_for].
    pub fn mood_gradient(&self, mood: Option<Mood>) -> (Rgb, Rgb) {
        let theme = catalog::theme_for(mood);
        (theme.from, theme.to)
    }
}

impl Default for MoodPalette {
    fn default() -> Self {
        Self::dark()
    }
}
