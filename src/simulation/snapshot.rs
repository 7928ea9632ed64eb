//! Read-only views handed to renderers

use serde::Serialize;

use super::cameras::{self, Camera};
use crate::core::types::{Outcome, Seconds, Side, View};
use crate::simulation::facility::SideSystems;

/// Camera currently on screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CameraFeed {
    pub slot: usize,
    #[serde(flatten)]
    pub camera: Camera,
}

impl CameraFeed {
    pub fn for_slot(slot: usize) -> Option<Self> {
        cameras::camera(slot).map(|camera| Self {
            slot,
            camera: *camera,
        })
    }
}

/// Everything a renderer needs to draw one frame
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Snapshot {
    pub ambient_event: String,
    /// Raw remaining power
    pub power: f64,
    /// Whole percentage for display
    pub power_percent: u32,
    pub active_systems: u8,
    pub hour_label: String,
    pub view: View,
    /// Present only while the camera grid is up
    pub camera: Option<CameraFeed>,
    pub left: SideSystems,
    pub right: SideSystems,
    /// Empty when no dialog is showing
    pub dialog: String,
}

impl Snapshot {
    pub fn side(&self, side: Side) -> &SideSystems {
        match side {
            Side::Left => &self.left,
            Side::Right => &self.right,
        }
    }

    pub fn has_dialog(&self) -> bool {
        !self.dialog.is_empty()
    }
}

/// Handed to the renderer once, when the shift ends
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShiftSummary {
    pub outcome: Outcome,
    pub elapsed_seconds: Seconds,
    pub hours_survived: u32,
    pub final_state: Snapshot,
}

impl ShiftSummary {
    pub fn banner(&self) -> &'static str {
        self.outcome.banner()
    }
}
