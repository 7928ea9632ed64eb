//! Hour progression
//!
//! Real seconds accumulate into an hour timer. Every time the timer passes
//! the hour length it wraps (keeping the overflow) and the hour index moves
//! on. The clock face starts at 12 and then counts 1, 2, 3...

use serde::{Deserialize, Serialize};

use crate::core::types::Seconds;

/// What the night does once enough hours have passed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum HourLimit {
    /// The shift is won when the clock face shows `hour`
    WinAt { hour: u32 },
    /// The hour index stops at `index`; the night never ends on its own
    CapAt { index: u32 },
}

/// Result of feeding one delta into the tracker
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HourAdvance {
    /// Number of times the hour index moved
    pub hours_passed: u32,
    /// The winning hour was reached
    pub survived: bool,
}

/// Clock-face label for an hour index
pub fn displayed_hour(index: u32) -> u32 {
    if index == 0 {
        12
    } else {
        index
    }
}

pub fn hour_label(index: u32) -> String {
    displayed_hour(index).to_string()
}

#[derive(Debug, Clone)]
pub struct HourTracker {
    timer: Seconds,
    index: u32,
    hour_length: Seconds,
    limit: HourLimit,
}

impl HourTracker {
    pub fn new(hour_length: Seconds, limit: HourLimit) -> Self {
        Self {
            timer: 0.0,
            index: 0,
            hour_length,
            limit,
        }
    }

    pub fn index(&self) -> u32 {
        self.index
    }

    pub fn timer(&self) -> Seconds {
        self.timer
    }

    pub fn label(&self) -> String {
        hour_label(self.index)
    }

    /// Accumulate `delta` seconds, wrapping as many hours as it covers
    pub fn advance(&mut self, delta: Seconds) -> HourAdvance {
        let mut result = HourAdvance::default();
        self.timer += delta;

        while self.timer >= self.hour_length {
            self.timer -= self.hour_length;

            match self.limit {
                HourLimit::WinAt { hour } => {
                    self.index += 1;
                    result.hours_passed += 1;
                    if displayed_hour(self.index) == hour {
                        result.survived = true;
                        break;
                    }
                }
                HourLimit::CapAt { index: cap } => {
                    if self.index < cap {
                        self.index += 1;
                        result.hours_passed += 1;
                    } else {
                        // Capped: nothing left to count, keep only the partial hour
                        self.timer %= self.hour_length;
                    }
                }
            }
        }

        result
    }
}
