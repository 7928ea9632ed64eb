//! Shift configuration with documented constants
//!
//! Every tunable of a shift is collected here. Two built-in presets cover the
//! rule sets the game ships with; either can be overridden by a TOML file with
//! the same layout as the bundled ones under `data/shifts/`.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::command::GridExitPolicy;
use crate::core::error::{Result, ShiftError};
use crate::simulation::hours::HourLimit;
use crate::simulation::power::{DrainBand, DrainPolicy};

/// Highest number of systems that can draw power at once
/// (two doors, two lights, the camera grid)
pub const MAX_ACTIVE_SYSTEMS: u8 = 5;

/// Built-in rule sets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Preset {
    /// Win at 6AM, drain by active-system bands, explicit camera exit
    Classic,
    /// No win, drain escalates with the hour, returning to center leaves the cameras
    Escalating,
}

impl Preset {
    pub fn name(&self) -> &'static str {
        match self {
            Preset::Classic => "classic",
            Preset::Escalating => "escalating",
        }
    }

    pub fn config(&self) -> ShiftConfig {
        match self {
            Preset::Classic => ShiftConfig::classic(),
            Preset::Escalating => ShiftConfig::escalating(),
        }
    }
}

impl FromStr for Preset {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "classic" => Ok(Preset::Classic),
            "escalating" => Ok(Preset::Escalating),
            other => Err(format!(
                "unknown preset '{}' (expected 'classic' or 'escalating')",
                other
            )),
        }
    }
}

/// Hour progression settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HoursConfig {
    /// Real seconds per in-game hour
    pub hour_length: f64,
    /// What happens when the night runs long enough
    pub limit: HourLimit,
}

impl Default for HoursConfig {
    fn default() -> Self {
        Self {
            hour_length: 85.0,
            limit: HourLimit::WinAt { hour: 6 },
        }
    }
}

/// Ambient "last sound" line
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AmbientConfig {
    /// Text shown when nothing has happened recently
    pub default_text: String,
    /// Seconds before an event reverts to the default text
    pub duration: f64,
}

impl Default for AmbientConfig {
    fn default() -> Self {
        Self {
            default_text: "Fan noises".to_string(),
            duration: 5.0,
        }
    }
}

/// Onboarding dialog box
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DialogConfig {
    /// Seconds each line stays on screen
    pub duration: f64,
    /// Lines queued at the start of the shift, in order
    pub onboarding: Vec<String>,
    /// Line appended when the player survives
    #[serde(default)]
    pub victory_message: Option<String>,
}

impl Default for DialogConfig {
    fn default() -> Self {
        Self {
            duration: 30.0,
            onboarding: [
                "Welcome to the Night Shift!",
                "Your job: survive until 6AM.",
                "Check the cameras often, but conserve power.",
                "Don't forget to close doors if you see anything suspicious!",
                "Good luck!",
            ]
            .iter()
            .map(|line| line.to_string())
            .collect(),
            victory_message: Some("Congratulations! You survived the night!".to_string()),
        }
    }
}

/// Complete configuration of one shift
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShiftConfig {
    /// Power at the start of the shift (percent)
    pub initial_power: f64,
    #[serde(default)]
    pub hours: HoursConfig,
    #[serde(default)]
    pub drain: DrainPolicy,
    #[serde(default)]
    pub grid_exit: GridExitPolicy,
    #[serde(default)]
    pub ambient: AmbientConfig,
    #[serde(default)]
    pub dialog: DialogConfig,
}

impl Default for ShiftConfig {
    fn default() -> Self {
        Self::classic()
    }
}

impl ShiftConfig {
    /// Win at 6AM; 85 second hours; drain by number of active systems
    pub fn classic() -> Self {
        Self {
            initial_power: 99.0,
            hours: HoursConfig::default(),
            drain: DrainPolicy::default(),
            grid_exit: GridExitPolicy::Explicit,
            ambient: AmbientConfig::default(),
            dialog: DialogConfig::default(),
        }
    }

    /// No win condition; 90 second hours; drain grows every hour and with each closed door
    pub fn escalating() -> Self {
        Self {
            initial_power: 100.0,
            hours: HoursConfig {
                hour_length: 90.0,
                limit: HourLimit::CapAt { index: 5 },
            },
            drain: DrainPolicy::Escalating {
                base_rate: 0.02,
                hour_step: 0.25,
                door_surcharge: 0.05,
            },
            grid_exit: GridExitPolicy::Implicit,
            ambient: AmbientConfig::default(),
            dialog: DialogConfig {
                duration: 30.0,
                onboarding: [
                    "Welcome to the Night Shift!",
                    "The power has to last. Every closed door costs extra.",
                    "It only gets worse as the night goes on.",
                    "Good luck!",
                ]
                .iter()
                .map(|line| line.to_string())
                .collect(),
                victory_message: None,
            },
        }
    }

    /// Parse a config from TOML text and validate it
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: ShiftConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a config from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// An explicit file wins over the preset
    pub fn resolve(preset: Preset, path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(preset.config()),
        }
    }

    /// Validate configuration for internal consistency
    pub fn validate(&self) -> Result<()> {
        if !(self.initial_power > 0.0 && self.initial_power <= 100.0) {
            return Err(invalid(format!(
                "initial_power ({}) must be in (0, 100]",
                self.initial_power
            )));
        }

        if !(self.hours.hour_length > 0.0 && self.hours.hour_length.is_finite()) {
            return Err(invalid(format!(
                "hours.hour_length ({}) must be positive",
                self.hours.hour_length
            )));
        }

        if let HourLimit::WinAt { hour } = self.hours.limit {
            if !(1..=12).contains(&hour) {
                return Err(invalid(format!(
                    "hours.limit hour ({}) must be a clock hour in 1..=12",
                    hour
                )));
            }
        }

        if !(self.ambient.duration > 0.0) {
            return Err(invalid("ambient.duration must be positive".to_string()));
        }

        if !(self.dialog.duration > 0.0) {
            return Err(invalid("dialog.duration must be positive".to_string()));
        }

        match &self.drain {
            DrainPolicy::BandTable { bands } => validate_bands(bands)?,
            DrainPolicy::Escalating {
                base_rate,
                hour_step,
                door_surcharge,
            } => {
                if *base_rate < 0.0 || *hour_step < 0.0 || *door_surcharge < 0.0 {
                    return Err(invalid(
                        "escalating drain coefficients must not be negative".to_string(),
                    ));
                }
            }
        }

        Ok(())
    }
}

fn validate_bands(bands: &[DrainBand]) -> Result<()> {
    let Some(last) = bands.last() else {
        return Err(invalid("drain.bands must not be empty".to_string()));
    };

    if last.max_active < MAX_ACTIVE_SYSTEMS {
        return Err(invalid(format!(
            "drain.bands must cover {} active systems",
            MAX_ACTIVE_SYSTEMS
        )));
    }

    for pair in bands.windows(2) {
        if pair[1].max_active <= pair[0].max_active {
            return Err(invalid("drain.bands must be sorted by max_active".to_string()));
        }
        if pair[1].rate < pair[0].rate {
            return Err(invalid(format!(
                "drain.bands rate must not decrease ({} after {})",
                pair[1].rate, pair[0].rate
            )));
        }
    }

    if bands.iter().any(|band| band.rate < 0.0) {
        return Err(invalid("drain.bands rate must not be negative".to_string()));
    }

    Ok(())
}

fn invalid(message: String) -> ShiftError {
    ShiftError::InvalidConfig(message)
}

/// Get path to a bundled preset file
pub fn preset_path(preset: Preset) -> PathBuf {
    PathBuf::from("data/shifts").join(format!("{}.toml", preset.name()))
}
