//! Politeness delay between fetches
//!
//! The random source is owned by the delay and handed in by the caller, so
//! a seeded generator makes the pause sequence reproducible.

use crate::config::MAX_DELAY_SECONDS;
use rand::rngs::StdRng;
use rand::Rng;
use std::time::Duration;

/// Randomized pause inserted between consecutive fetches
pub struct PolitenessDelay {
    min: f64,
    max: f64,
    enabled: bool,
    rng: StdRng,
}

impl PolitenessDelay {
    /// Creates a delay sampling uniformly from `[min, max)` seconds
    ///
    /// `min <= max` is enforced by configuration validation.
    pub fn new(min: f64, max: f64, enabled: bool, rng: StdRng) -> Self {
        Self {
            min,
            max,
            enabled,
            rng,
        }
    }

    /// Returns whether pauses are applied at all
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Draws the next pause length, in seconds
    pub fn sample(&mut self) -> f64 {
        self.min + self.rng.random::<f64>() * (self.max - self.min)
    }

    /// Sleeps for a freshly sampled duration, unless disabled
    ///
    /// Samples are capped at [`MAX_DELAY_SECONDS`]. Returns the length of
    /// the pause that was taken.
    pub async fn wait(&mut self) -> Duration {
        if !self.enabled {
            return Duration::ZERO;
        }

        let seconds = self.sample().min(MAX_DELAY_SECONDS);
        tracing::info!("Pausing for {:.3} seconds", seconds);
        let pause = Duration::try_from_secs_f64(seconds).unwrap_or(Duration::ZERO);
        tokio::time::sleep(pause).await;
        pause
    }
}
