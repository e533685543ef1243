//! Frame pacing: sleep away whatever is left of the frame budget.

use std::thread;
use std::time::{Duration, Instant};

use crate::types::{RainConfig, SLEEP_THRESHOLD_US};

#[derive(Debug, Clone, Copy)]
pub struct FramePacer {
    budget: Duration,
    threshold: Duration,
}

impl FramePacer {
    pub fn new(budget: Duration, threshold: Duration) -> Self {
        Self { budget, threshold }
    }

    pub fn from_config(config: &RainConfig) -> Self {
        Self::new(
            config.frame_budget(),
            Duration::from_micros(SLEEP_THRESHOLD_US),
        )
    }

    pub fn budget(&self) -> Duration {
        self.budget
    }

    /// How long to sleep after a frame that took `elapsed`.
    ///
    /// `None` when the frame overran its budget or the leftover is below the
    /// threshold (scheduler granularity would make the sleep overshoot).
    pub fn remaining(&self, elapsed: Duration) -> Option<Duration> {
        let rem = self.budget.checked_sub(elapsed)?;
        (rem > self.threshold).then_some(rem)
    }

    /// Sleep until the frame that began at `frame_start` has used its budget.
    pub fn pace(&self, frame_start: Instant) {
        if let Some(rem) = self.remaining(frame_start.elapsed()) {
            thread::sleep(rem);
        }
    }
}

impl Default for FramePacer {
    fn default() -> Self {
        Self::from_config(&RainConfig::default())
    }
}
