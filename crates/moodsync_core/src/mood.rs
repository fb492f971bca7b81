//! The five-label mood enumeration that drives all content selection.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// A detected (or defaulted) mood. Closed set; unset is `Option<Mood>::None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mood {
    Happy,
    Calm,
    Focused,
    Energetic,
    Relaxed,
}

impl Mood {
    /// All moods in catalog declaration order.
    pub const ALL: [Mood; 5] = [
        Mood::Happy,
        Mood::Calm,
        Mood::Focused,
        Mood::Energetic,
        Mood::Relaxed,
    ];

    /// Uniform selector fallback when no mood is set.
    pub const DEFAULT: Mood = Mood::Calm;

    pub fn as_str(&self) -> &'static str {
        match self {
            Mood::Happy => "happy",
            Mood::Calm => "calm",
            Mood::Focused => "focused",
            Mood::Energetic => "energetic",
            Mood::Relaxed => "relaxed",
        }
    }
}

impl FromStr for Mood {
    type Err = crate::error::MoodSyncError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "happy" => Ok(Mood::Happy),
            "calm" => Ok(Mood::Calm),
            "focused" => Ok(Mood::Focused),
            "energetic" => Ok(Mood::Energetic),
            "relaxed" => Ok(Mood::Relaxed),
            other => Err(crate::error::MoodSyncError::Config(format!(
                "unknown mood: {other}"
            ))),
        }
    }
}

impl std::fmt::Display for Mood {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_moods_roundtrip_str() {
        for mood in Mood::ALL {
            let parsed: Mood = mood.as_str().parse().unwrap();
            assert_eq!(parsed, mood);
        }
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("Happy".parse::<Mood>().unwrap(), Mood::Happy);
        assert_eq!("ENERGETIC".parse::<Mood>().unwrap(), Mood::Energetic);
    }

    #[test]
    fn test_parse_unknown_fails() {
        assert!("melancholy".parse::<Mood>().is_err());
    }

    #[test]
    fn test_serde_lowercase() {
        let json = serde_json::to_string(&Mood::Focused).unwrap();
        assert_eq!(json, r#""focused""#);
        let back: Mood = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Mood::Focused);
    }

    #[test]
    fn test_default_is_calm() {
        assert_eq!(Mood::DEFAULT, Mood::Calm);
    }
}
