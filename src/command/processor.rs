//! Command dispatch - applies one command to the facility

use serde::{Deserialize, Serialize};

use super::Command;
use crate::core::types::{Side, View};
use crate::simulation::cameras;
use crate::simulation::facility::FacilityState;
use crate::simulation::notifications::NotificationSystem;

/// What "return to center" does while the camera grid is up
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GridExitPolicy {
    /// Only the exit-grid command leaves the cameras
    #[default]
    Explicit,
    /// Returning to center also puts the cameras down
    Implicit,
}

/// Result of dispatching a command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dispatch {
    /// Something visible changed
    Applied,
    /// Not applicable in the current state, or nothing visible changed
    Ignored,
    /// End the shift now
    Quit,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct CommandProcessor {
    grid_exit: GridExitPolicy,
}

impl CommandProcessor {
    pub fn new(grid_exit: GridExitPolicy) -> Self {
        Self { grid_exit }
    }

    pub fn grid_exit(&self) -> GridExitPolicy {
        self.grid_exit
    }

    /// Apply a command, marking the facility dirty on every change
    pub fn apply(
        &self,
        command: Command,
        facility: &mut FacilityState,
        notifications: &mut NotificationSystem,
    ) -> Dispatch {
        if command == Command::Quit {
            return Dispatch::Quit;
        }

        if facility.camera_grid_active() {
            self.apply_in_grid(command, facility, notifications)
        } else {
            self.apply_in_office(command, facility, notifications)
        }
    }

    fn apply_in_grid(
        &self,
        command: Command,
        facility: &mut FacilityState,
        notifications: &mut NotificationSystem,
    ) -> Dispatch {
        match command {
            Command::SelectCamera(key) => match cameras::slot_for_key(key) {
                Some(slot) => {
                    let switched = facility.select_camera(slot);
                    let announced = notifications
                        .ambient
                        .set(format!("Camera {} activated", slot + 1));
                    settle(facility, switched || announced)
                }
                None => Dispatch::Ignored,
            },
            Command::ExitGrid => {
                facility.close_grid();
                Dispatch::Applied
            }
            Command::ReturnCenter if self.grid_exit == GridExitPolicy::Implicit => {
                facility.close_grid();
                Dispatch::Applied
            }
            _ => Dispatch::Ignored,
        }
    }

    fn apply_in_office(
        &self,
        command: Command,
        facility: &mut FacilityState,
        notifications: &mut NotificationSystem,
    ) -> Dispatch {
        match command {
            Command::LookLeft => look_toward(Side::Left, facility, notifications),
            Command::LookRight => look_toward(Side::Right, facility, notifications),
            Command::ToggleDoor => {
                if facility.toggle_door() {
                    notifications.ambient.set("Door toggled");
                    Dispatch::Applied
                } else {
                    Dispatch::Ignored
                }
            }
            Command::ToggleLight => {
                if facility.toggle_light() {
                    notifications.ambient.set("Light toggled");
                    Dispatch::Applied
                } else {
                    Dispatch::Ignored
                }
            }
            Command::OpenGrid if facility.view() == View::Center => {
                facility.open_grid();
                Dispatch::Applied
            }
            Command::ReturnCenter => {
                let turned = facility.look(View::Center);
                settle(facility, turned)
            }
            _ => Dispatch::Ignored,
        }
    }
}

/// Turn to a side; looking again only restarts the footsteps line
fn look_toward(
    side: Side,
    facility: &mut FacilityState,
    notifications: &mut NotificationSystem,
) -> Dispatch {
    let view = match side {
        Side::Left => View::Left,
        Side::Right => View::Right,
    };
    let turned = facility.look(view);
    let heard = notifications.ambient.set(footsteps(side));
    settle(facility, turned || heard)
}

/// Applied only when something on screen changed
fn settle(facility: &mut FacilityState, changed: bool) -> Dispatch {
    if changed {
        facility.mark_dirty();
        Dispatch::Applied
    } else {
        Dispatch::Ignored
    }
}

fn footsteps(side: Side) -> String {
    format!("Footsteps heard on {}", side.name())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::{AmbientConfig, DialogConfig};

    fn setup() -> (FacilityState, NotificationSystem) {
        let mut facility = FacilityState::new();
        facility.take_dirty();
        let notifications =
            NotificationSystem::new(&AmbientConfig::default(), &DialogConfig::default());
        (facility, notifications)
    }

    #[test]
    fn test_look_fires_footsteps() {
        let (mut facility, mut notifications) = setup();
        let processor = CommandProcessor::default();

        assert_eq!(
            processor.apply(Command::LookLeft, &mut facility, &mut notifications),
            Dispatch::Applied
        );
        assert_eq!(facility.view(), View::Left);
        assert_eq!(notifications.ambient.text(), "Footsteps heard on left");
        assert!(facility.is_dirty());

        processor.apply(Command::LookRight, &mut facility, &mut notifications);
        assert_eq!(notifications.ambient.text(), "Footsteps heard on right");
    }

    #[test]
    fn test_toggle_at_center_is_silent() {
        let (mut facility, mut notifications) = setup();
        let processor = CommandProcessor::default();

        assert_eq!(
            processor.apply(Command::ToggleDoor, &mut facility, &mut notifications),
            Dispatch::Ignored
        );
        assert_eq!(notifications.ambient.text(), "Fan noises");
        assert!(!facility.is_dirty());
    }

    #[test]
    fn test_open_grid_only_from_center() {
        let (mut facility, mut notifications) = setup();
        let processor = CommandProcessor::default();

        processor.apply(Command::LookLeft, &mut facility, &mut notifications);
        assert_eq!(
            processor.apply(Command::OpenGrid, &mut facility, &mut notifications),
            Dispatch::Ignored
        );
        assert!(!facility.camera_grid_active());

        processor.apply(Command::ReturnCenter, &mut facility, &mut notifications);
        assert_eq!(
            processor.apply(Command::OpenGrid, &mut facility, &mut notifications),
            Dispatch::Applied
        );
        assert_eq!(facility.view(), View::CameraGrid);
        assert_eq!(facility.camera_slot(), 0);
    }

    #[test]
    fn test_camera_select_names_one_based_slot() {
        let (mut facility, mut notifications) = setup();
        let processor = CommandProcessor::default();
        processor.apply(Command::OpenGrid, &mut facility, &mut notifications);

        processor.apply(Command::SelectCamera('2'), &mut facility, &mut notifications);
        assert_eq!(facility.camera_slot(), 8);
        assert_eq!(notifications.ambient.text(), "Camera 9 activated");
    }

    #[test]
    fn test_camera_select_ignored_outside_grid() {
        let (mut facility, mut notifications) = setup();
        let processor = CommandProcessor::default();

        assert_eq!(
            processor.apply(Command::SelectCamera('5'), &mut facility, &mut notifications),
            Dispatch::Ignored
        );
        assert_eq!(facility.camera_slot(), 0);
        assert!(!facility.is_dirty());
    }

    #[test]
    fn test_grid_ignores_office_commands() {
        let (mut facility, mut notifications) = setup();
        let processor = CommandProcessor::default();
        processor.apply(Command::OpenGrid, &mut facility, &mut notifications);
        facility.take_dirty();

        for command in [
            Command::LookLeft,
            Command::LookRight,
            Command::ToggleDoor,
            Command::ToggleLight,
            Command::OpenGrid,
        ] {
            assert_eq!(
                processor.apply(command, &mut facility, &mut notifications),
                Dispatch::Ignored
            );
        }
        assert_eq!(facility.view(), View::CameraGrid);
        assert!(!facility.is_dirty());
    }

    #[test]
    fn test_explicit_policy_requires_exit_grid() {
        let (mut facility, mut notifications) = setup();
        let processor = CommandProcessor::new(GridExitPolicy::Explicit);
        processor.apply(Command::OpenGrid, &mut facility, &mut notifications);

        assert_eq!(
            processor.apply(Command::ReturnCenter, &mut facility, &mut notifications),
            Dispatch::Ignored
        );
        assert!(facility.camera_grid_active());

        assert_eq!(
            processor.apply(Command::ExitGrid, &mut facility, &mut notifications),
            Dispatch::Applied
        );
        assert_eq!(facility.view(), View::Center);
    }

    #[test]
    fn test_implicit_policy_return_center_leaves_grid() {
        let (mut facility, mut notifications) = setup();
        let processor = CommandProcessor::new(GridExitPolicy::Implicit);
        processor.apply(Command::OpenGrid, &mut facility, &mut notifications);

        assert_eq!(
            processor.apply(Command::ReturnCenter, &mut facility, &mut notifications),
            Dispatch::Applied
        );
        assert!(!facility.camera_grid_active());
        assert_eq!(facility.view(), View::Center);
    }

    #[test]
    fn test_exit_grid_outside_grid_ignored() {
        let (mut facility, mut notifications) = setup();
        let processor = CommandProcessor::default();
        processor.apply(Command::LookRight, &mut facility, &mut notifications);
        facility.take_dirty();

        assert_eq!(
            processor.apply(Command::ExitGrid, &mut facility, &mut notifications),
            Dispatch::Ignored
        );
        assert_eq!(facility.view(), View::Right);
    }

    #[test]
    fn test_return_center_at_center_ignored() {
        let (mut facility, mut notifications) = setup();
        let processor = CommandProcessor::default();

        assert_eq!(
            processor.apply(Command::ReturnCenter, &mut facility, &mut notifications),
            Dispatch::Ignored
        );
        assert!(!facility.is_dirty());
    }

    #[test]
    fn test_repeat_look_is_clean_until_sound_fades() {
        let (mut facility, mut notifications) = setup();
        let processor = CommandProcessor::default();
        processor.apply(Command::LookLeft, &mut facility, &mut notifications);
        facility.take_dirty();

        assert_eq!(
            processor.apply(Command::LookLeft, &mut facility, &mut notifications),
            Dispatch::Ignored
        );
        assert!(!facility.is_dirty());

        // Once the footsteps fade, looking again brings them back on screen
        notifications.advance(5.0);
        assert_eq!(
            processor.apply(Command::LookLeft, &mut facility, &mut notifications),
            Dispatch::Applied
        );
        assert_eq!(notifications.ambient.text(), "Footsteps heard on left");
        assert!(facility.is_dirty());
    }

    #[test]
    fn test_reselecting_camera_ignored() {
        let (mut facility, mut notifications) = setup();
        let processor = CommandProcessor::default();
        processor.apply(Command::OpenGrid, &mut facility, &mut notifications);
        processor.apply(Command::SelectCamera('2'), &mut facility, &mut notifications);
        facility.take_dirty();

        assert_eq!(
            processor.apply(Command::SelectCamera('2'), &mut facility, &mut notifications),
            Dispatch::Ignored
        );
        assert!(!facility.is_dirty());
    }

    #[test]
    fn test_quit_changes_nothing() {
        let (mut facility, mut notifications) = setup();
        let processor = CommandProcessor::default();

        assert_eq!(
            processor.apply(Command::Quit, &mut facility, &mut notifications),
            Dispatch::Quit
        );
        assert!(!facility.is_dirty());
    }
}
