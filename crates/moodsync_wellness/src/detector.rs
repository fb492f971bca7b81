//! Mood detection seam.
//!
//! [MoodDetector] is the interface a real inference backend would satisfy;
//! [SimulatedDetector] is the stand-in the app ships with: wait a fixed
//! delay, emit one uniformly-random label. Frames are never analyzed.

use std::time::Duration;

use async_trait::async_trait;
use moodsync_core::{Mood, Result};
use moodsync_constant::timing;
use rand::seq::SliceRandom;

/// A mood detection backend.
#[async_trait]
pub trait MoodDetector: Send + Sync {
    async fn detect(&self) -> Result<Mood>;
}

/// The mocked detector: fixed delay, uniform random label.
pub struct SimulatedDetector {
    delay: Duration,
}

impl SimulatedDetector {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

impl Default for SimulatedDetector {
    fn default() -> Self {
        Self::new(Duration::from_millis(timing::MOOD_ANALYSIS_DELAY_MS))
    }
}

#[async_trait]
impl MoodDetector for SimulatedDetector {
    async fn detect(&self) -> Result<Mood> {
        tokio::time::sleep(self.delay).await;
        let mood = Mood::ALL
            .choose(&mut rand::thread_rng())
            .copied()
            .unwrap_or(Mood::DEFAULT);
        Ok(mood)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_detect_emits_exactly_one_known_label() {
        let detector = SimulatedDetector::new(Duration::from_millis(1));
        let mood = detector.detect().await.unwrap();
        assert!(Mood::ALL.contains(&mood));
    }

    #[tokio::test]
    async fn test_detect_waits_for_the_delay() {
        let detector = SimulatedDetector::new(Duration::from_millis(30));
        let start = std::time::Instant::now();
        detector.detect().await.unwrap();
        assert!(start.elapsed() >= Duration::from_millis(30));
    }

    #[tokio::test]
    async fn test_repeated_detection_covers_multiple_labels() {
        // Uniform choice over 5 labels: 64 draws landing on one label has
        // probability (1/5)^63 — treat as impossible.
        let detector = SimulatedDetector::new(Duration::from_millis(0));
        let mut seen = std::collections::HashSet::new();
        for _ in 0..64 {
            seen.insert(detector.detect().await.unwrap());
        }
        assert!(seen.len() > 1);
    }
}
