//! MoodSync theme: semantic palette plus per-mood gradient tints.
//!
//! The palette carries the chrome roles (surfaces, borders, text, semantic
//! colors); the per-mood gradient pairs come from the core catalog so every
//! surface agrees with the content selectors.
//!
//! # Example
//!
//! ```ignore
//! use moodsync_tui::theme::{Appearance, MoodPalette};
//!
//! let palette = MoodPalette::for_appearance(Appearance::Dark);
//! let text = palette.text;
//! ```

mod appearance;
mod palette;

pub use appearance::Appearance;
pub use palette::MoodPalette;

use moodsync_core::Rgb;
use ratatui::style::Color;

/// Rgb → ratatui color.
pub fn color(rgb: Rgb) -> Color {
    Color::Rgb(rgb.0, rgb.1, rgb.2)
}
