//! Power drain model
//!
//! Power is a percentage that only ever goes down. Each tick the active
//! drain policy turns the facility's current load into a rate (percent per
//! second) which is integrated over the tick's delta.

use serde::{Deserialize, Serialize};

use crate::core::types::Seconds;

/// One row of a band table: every load up to `max_active` drains at `rate`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DrainBand {
    pub max_active: u8,
    pub rate: f64,
}

/// Facility load as seen by the drain policy
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DrainInputs {
    pub active_systems: u8,
    pub doors_closed: u8,
    pub hour_index: u32,
}

/// How the current load maps to a drain rate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DrainPolicy {
    /// Step function over the number of active systems
    BandTable { bands: Vec<DrainBand> },
    /// `base_rate * (1 + hour * hour_step) + door_surcharge * closed doors`
    Escalating {
        base_rate: f64,
        hour_step: f64,
        door_surcharge: f64,
    },
}

impl Default for DrainPolicy {
    fn default() -> Self {
        Self::BandTable {
            bands: vec![
                DrainBand { max_active: 0, rate: 0.141 },
                DrainBand { max_active: 1, rate: 0.235 },
                DrainBand { max_active: 3, rate: 0.341 },
                DrainBand { max_active: 5, rate: 0.447 },
            ],
        }
    }
}

impl DrainPolicy {
    /// Drain rate in percent per second
    pub fn rate(&self, inputs: DrainInputs) -> f64 {
        match self {
            Self::BandTable { bands } => bands
                .iter()
                .find(|band| inputs.active_systems <= band.max_active)
                .or_else(|| bands.last())
                .map(|band| band.rate)
                .unwrap_or(0.0),
            Self::Escalating {
                base_rate,
                hour_step,
                door_surcharge,
            } => {
                let multiplier = 1.0 + inputs.hour_index as f64 * hour_step;
                base_rate * multiplier + door_surcharge * inputs.doors_closed as f64
            }
        }
    }
}

/// `max(0, power - rate * delta)`
pub fn integrate(power: f64, rate: f64, delta: Seconds) -> f64 {
    (power - rate * delta).max(0.0)
}

/// Remaining power and the whole percentage last shown to the player
#[derive(Debug, Clone)]
pub struct PowerModel {
    level: f64,
    last_whole: u32,
    policy: DrainPolicy,
}

impl PowerModel {
    pub fn new(initial: f64, policy: DrainPolicy) -> Self {
        let level = initial.clamp(0.0, 100.0);
        Self {
            level,
            last_whole: whole_percent(level),
            policy,
        }
    }

    pub fn level(&self) -> f64 {
        self.level
    }

    /// Integer truncation used for display
    pub fn percent(&self) -> u32 {
        whole_percent(self.level)
    }

    pub fn policy(&self) -> &DrainPolicy {
        &self.policy
    }

    pub fn is_depleted(&self) -> bool {
        self.level <= 0.0
    }

    /// Integrate one tick of drain
    ///
    /// Returns true when the displayed whole percentage changed.
    pub fn drain(&mut self, inputs: DrainInputs, delta: Seconds) -> bool {
        let rate = self.policy.rate(inputs);
        self.level = integrate(self.level, rate, delta);

        let whole = whole_percent(self.level);
        if whole != self.last_whole {
            self.last_whole = whole;
            true
        } else {
            false
        }
    }
}

fn whole_percent(level: f64) -> u32 {
    level.max(0.0).trunc() as u32
}
