//! Delta-time sources

use std::time::Instant;

use crate::core::types::Seconds;

/// Produces one non-negative delta per tick
pub trait Clock {
    fn delta(&mut self) -> Seconds;
}

/// Wall-clock time since the previous call (or since construction)
#[derive(Debug, Clone)]
pub struct WallClock {
    last: Instant,
}

impl WallClock {
    pub fn new() -> Self {
        Self {
            last: Instant::now(),
        }
    }
}

impl Default for WallClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for WallClock {
    fn delta(&mut self) -> Seconds {
        let now = Instant::now();
        let delta = now.saturating_duration_since(self.last);
        self.last = now;
        delta.as_secs_f64()
    }
}

/// Same delta every tick, for headless runs and tests
#[derive(Debug, Clone, Copy)]
pub struct FixedStepClock {
    step: Seconds,
}

impl FixedStepClock {
    pub fn new(step: Seconds) -> Self {
        Self {
            step: step.max(0.0),
        }
    }
}

impl Clock for FixedStepClock {
    fn delta(&mut self) -> Seconds {
        self.step
    }
}
