//! Facility state: where the player looks and what is switched on

use serde::{Deserialize, Serialize};

use crate::core::types::{Side, View};

/// Door and light of one side of the office
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SideSystems {
    pub door_closed: bool,
    pub light_on: bool,
}

impl SideSystems {
    fn active_count(&self) -> u8 {
        self.door_closed as u8 + self.light_on as u8
    }
}

/// Single source of truth for view, cameras, doors and lights
///
/// The camera grid is active exactly when the view is `CameraGrid`, so the
/// two can never disagree.
#[derive(Debug, Clone)]
pub struct FacilityState {
    view: View,
    camera_slot: usize,
    left: SideSystems,
    right: SideSystems,
    dirty: bool,
}

impl Default for FacilityState {
    fn default() -> Self {
        Self::new()
    }
}

impl FacilityState {
    /// Everything off, facing the center, marked dirty for the first draw
    pub fn new() -> Self {
        Self {
            view: View::Center,
            camera_slot: 0,
            left: SideSystems::default(),
            right: SideSystems::default(),
            dirty: true,
        }
    }

    pub fn view(&self) -> View {
        self.view
    }

    pub fn camera_grid_active(&self) -> bool {
        self.view == View::CameraGrid
    }

    pub fn camera_slot(&self) -> usize {
        self.camera_slot
    }

    pub fn side(&self, side: Side) -> &SideSystems {
        match side {
            Side::Left => &self.left,
            Side::Right => &self.right,
        }
    }

    /// Systems currently drawing power: doors, lights and the camera grid
    pub fn active_systems(&self) -> u8 {
        self.left.active_count() + self.right.active_count() + self.camera_grid_active() as u8
    }

    pub fn doors_closed(&self) -> u8 {
        self.left.door_closed as u8 + self.right.door_closed as u8
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    /// Read and clear the dirty flag
    pub fn take_dirty(&mut self) -> bool {
        std::mem::replace(&mut self.dirty, false)
    }

    /// Face `view`; false when already facing it
    pub fn look(&mut self, view: View) -> bool {
        if self.view == view {
            return false;
        }
        if view == View::CameraGrid {
            self.open_grid();
            return true;
        }
        self.view = view;
        self.dirty = true;
        true
    }

    pub fn open_grid(&mut self) {
        self.view = View::CameraGrid;
        self.camera_slot = 0;
        self.dirty = true;
    }

    pub fn close_grid(&mut self) {
        self.view = View::Center;
        self.dirty = true;
    }

    /// Switch feeds; false when `slot` is already on screen
    pub fn select_camera(&mut self, slot: usize) -> bool {
        if self.camera_slot == slot {
            return false;
        }
        self.camera_slot = slot;
        self.dirty = true;
        true
    }

    /// Flip the door on the side being faced; false when not facing a side
    pub fn toggle_door(&mut self) -> bool {
        self.toggle_faced(|systems| systems.door_closed = !systems.door_closed)
    }

    /// Flip the light on the side being faced; false when not facing a side
    pub fn toggle_light(&mut self) -> bool {
        self.toggle_faced(|systems| systems.light_on = !systems.light_on)
    }

    fn toggle_faced(&mut self, flip: impl FnOnce(&mut SideSystems)) -> bool {
        let systems = match self.view.side() {
            Some(Side::Left) => &mut self.left,
            Some(Side::Right) => &mut self.right,
            None => return false,
        };
        flip(systems);
        self.dirty = true;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let facility = FacilityState::new();
        assert_eq!(facility.view(), View::Center);
        assert!(!facility.camera_grid_active());
        assert_eq!(facility.active_systems(), 0);
        assert!(facility.is_dirty());
    }

    #[test]
    fn test_take_dirty_clears() {
        let mut facility = FacilityState::new();
        assert!(facility.take_dirty());
        assert!(!facility.take_dirty());
        assert!(!facility.is_dirty());
    }

    #[test]
    fn test_toggle_follows_view() {
        let mut facility = FacilityState::new();
        facility.look(View::Left);
        assert!(facility.toggle_door());
        assert!(facility.side(Side::Left).door_closed);
        assert!(!facility.side(Side::Right).door_closed);

        facility.look(View::Right);
        assert!(facility.toggle_light());
        assert!(facility.side(Side::Right).light_on);
        assert!(!facility.side(Side::Left).light_on);

        assert_eq!(facility.active_systems(), 2);
        assert_eq!(facility.doors_closed(), 1);
    }

    #[test]
    fn test_toggle_rejected_at_center() {
        let mut facility = FacilityState::new();
        facility.take_dirty();

        assert!(!facility.toggle_door());
        assert!(!facility.toggle_light());
        assert_eq!(facility.active_systems(), 0);
        assert!(!facility.is_dirty());
    }

    #[test]
    fn test_look_at_current_view_is_clean() {
        let mut facility = FacilityState::new();
        facility.take_dirty();

        assert!(!facility.look(View::Center));
        assert!(!facility.is_dirty());

        assert!(facility.look(View::Left));
        assert!(facility.take_dirty());
        assert!(!facility.look(View::Left));
        assert!(!facility.is_dirty());
    }

    #[test]
    fn test_reselecting_camera_is_clean() {
        let mut facility = FacilityState::new();
        facility.open_grid();
        assert!(facility.select_camera(3));
        facility.take_dirty();

        assert!(!facility.select_camera(3));
        assert!(!facility.is_dirty());
    }

    #[test]
    fn test_grid_counts_as_active_system() {
        let mut facility = FacilityState::new();
        facility.select_camera(4);
        facility.open_grid();
        assert!(facility.camera_grid_active());
        assert_eq!(facility.camera_slot(), 0);
        assert_eq!(facility.active_systems(), 1);

        facility.close_grid();
        assert_eq!(facility.view(), View::Center);
        assert_eq!(facility.active_systems(), 0);
    }
}
