//! Shift state machine and the loop that drives it
//!
//! Each tick while running:
//! 1. hours advance (may win)
//! 2. power drains against the current load (may fail)
//! 3. ambient line and dialog box advance
//! 4. at most one buffered command is applied (may quit)
//! 5. if anything visible changed, a snapshot goes to the renderer
//!
//! Once a terminal state is reached the summary is handed over exactly once
//! and further ticks change nothing.

use tracing::{debug, info, trace};

use super::clock::Clock;
use super::facility::FacilityState;
use super::hours::HourTracker;
use super::notifications::NotificationSystem;
use super::power::{DrainInputs, PowerModel};
use super::snapshot::{CameraFeed, ShiftSummary, Snapshot};
use crate::command::{Command, CommandProcessor, Dispatch};
use crate::core::config::ShiftConfig;
use crate::core::error::Result;
use crate::core::types::{Seconds, ShiftStatus, Side};

/// Source of player commands; must never block
pub trait InputSource {
    fn poll(&mut self) -> Result<Option<Command>>;
}

/// Consumer of read-only snapshots
pub trait RenderSink {
    fn present(&mut self, snapshot: &Snapshot) -> Result<()>;
    fn conclude(&mut self, summary: &ShiftSummary) -> Result<()>;
}

/// What one tick produced
#[derive(Debug, Clone, PartialEq)]
pub struct Step {
    pub status: ShiftStatus,
    /// Present when the state changed and the shift is still running
    pub snapshot: Option<Snapshot>,
    /// Present only on the tick that ended the shift
    pub summary: Option<ShiftSummary>,
}

impl Step {
    fn idle(status: ShiftStatus) -> Self {
        Self {
            status,
            snapshot: None,
            summary: None,
        }
    }
}

/// One night: the owned aggregate of all simulation state
#[derive(Debug, Clone)]
pub struct Shift {
    processor: CommandProcessor,
    facility: FacilityState,
    power: PowerModel,
    hours: HourTracker,
    notifications: NotificationSystem,
    victory_message: Option<String>,
    status: ShiftStatus,
    elapsed: Seconds,
}

impl Shift {
    pub fn new(config: &ShiftConfig) -> Self {
        Self {
            processor: CommandProcessor::new(config.grid_exit),
            facility: FacilityState::new(),
            power: PowerModel::new(config.initial_power, config.drain.clone()),
            hours: HourTracker::new(config.hours.hour_length, config.hours.limit),
            notifications: NotificationSystem::new(&config.ambient, &config.dialog),
            victory_message: config.dialog.victory_message.clone(),
            status: ShiftStatus::Running,
            elapsed: 0.0,
        }
    }

    pub fn status(&self) -> ShiftStatus {
        self.status
    }

    pub fn facility(&self) -> &FacilityState {
        &self.facility
    }

    pub fn power(&self) -> &PowerModel {
        &self.power
    }

    pub fn hours(&self) -> &HourTracker {
        &self.hours
    }

    pub fn notifications(&self) -> &NotificationSystem {
        &self.notifications
    }

    pub fn elapsed(&self) -> Seconds {
        self.elapsed
    }

    /// Advance the shift by `delta` seconds and apply `input`
    pub fn step(&mut self, delta: Seconds, input: Option<Command>) -> Step {
        if self.status.is_terminal() {
            return Step::idle(self.status);
        }

        let delta = if delta.is_finite() { delta.max(0.0) } else { 0.0 };
        self.elapsed += delta;

        let advance = self.hours.advance(delta);
        if advance.hours_passed > 0 {
            self.facility.mark_dirty();
            info!(hour = %self.hours.label(), "hour.advanced");
        }
        if advance.survived {
            if let Some(message) = &self.victory_message {
                self.notifications.dialog.push(message.clone());
            }
            return self.finish(ShiftStatus::Won);
        }

        let load = DrainInputs {
            active_systems: self.facility.active_systems(),
            doors_closed: self.facility.doors_closed(),
            hour_index: self.hours.index(),
        };
        if self.power.drain(load, delta) {
            self.facility.mark_dirty();
        }
        if self.power.is_depleted() {
            return self.finish(ShiftStatus::PowerFailed);
        }

        if self.notifications.advance(delta) {
            self.facility.mark_dirty();
        }

        if let Some(command) = input {
            match self
                .processor
                .apply(command, &mut self.facility, &mut self.notifications)
            {
                Dispatch::Applied => debug!(?command, "command.applied"),
                Dispatch::Ignored => trace!(?command, "command.ignored"),
                Dispatch::Quit => return self.finish(ShiftStatus::Quit),
            }
        }

        let snapshot = self.facility.take_dirty().then(|| self.snapshot());
        Step {
            status: self.status,
            snapshot,
            summary: None,
        }
    }

    /// Current state as a read-only snapshot
    pub fn snapshot(&self) -> Snapshot {
        let camera = if self.facility.camera_grid_active() {
            CameraFeed::for_slot(self.facility.camera_slot())
        } else {
            None
        };

        Snapshot {
            ambient_event: self.notifications.ambient.text().to_string(),
            power: self.power.level(),
            power_percent: self.power.percent(),
            active_systems: self.facility.active_systems(),
            hour_label: self.hours.label(),
            view: self.facility.view(),
            camera,
            left: *self.facility.side(Side::Left),
            right: *self.facility.side(Side::Right),
            dialog: self.notifications.dialog.current().to_string(),
        }
    }

    fn finish(&mut self, status: ShiftStatus) -> Step {
        self.status = status;
        self.facility.take_dirty();

        let summary = status.outcome().map(|outcome| ShiftSummary {
            outcome,
            elapsed_seconds: self.elapsed,
            hours_survived: self.hours.index(),
            final_state: self.snapshot(),
        });
        info!(
            status = ?status,
            power = self.power.level(),
            hour = %self.hours.label(),
            elapsed = self.elapsed,
            "shift.ended"
        );

        Step {
            status,
            snapshot: None,
            summary,
        }
    }
}

/// Wires a shift to its clock, input and renderer
pub struct SimulationLoop<C, I, R> {
    shift: Shift,
    clock: C,
    input: I,
    sink: R,
    summary: Option<ShiftSummary>,
}

impl<C: Clock, I: InputSource, R: RenderSink> SimulationLoop<C, I, R> {
    pub fn new(shift: Shift, clock: C, input: I, sink: R) -> Self {
        Self {
            shift,
            clock,
            input,
            sink,
            summary: None,
        }
    }

    pub fn shift(&self) -> &Shift {
        &self.shift
    }

    pub fn sink(&self) -> &R {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut R {
        &mut self.sink
    }

    pub fn status(&self) -> ShiftStatus {
        self.shift.status()
    }

    /// The summary, once the shift has ended
    pub fn summary(&self) -> Option<&ShiftSummary> {
        self.summary.as_ref()
    }

    /// Run one tick; a no-op once the shift has ended
    pub fn tick(&mut self) -> Result<ShiftStatus> {
        if self.shift.status().is_terminal() {
            return Ok(self.shift.status());
        }

        let delta = self.clock.delta();
        let input = self.input.poll()?;
        let step = self.shift.step(delta, input);

        if let Some(snapshot) = &step.snapshot {
            self.sink.present(snapshot)?;
        }
        if let Some(summary) = step.summary {
            self.sink.conclude(&summary)?;
            self.summary = Some(summary);
        }

        Ok(step.status)
    }

    pub fn into_parts(self) -> (Shift, R) {
        (self.shift, self.sink)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::{Outcome, View};

    fn classic() -> Shift {
        Shift::new(&ShiftConfig::classic())
    }

    #[test]
    fn test_first_step_renders() {
        let mut shift = classic();
        let step = shift.step(0.0, None);
        assert_eq!(step.status, ShiftStatus::Running);

        let snapshot = step.snapshot.expect("initial state must be drawn");
        assert_eq!(snapshot.power_percent, 99);
        assert_eq!(snapshot.hour_label, "12");
        assert_eq!(snapshot.dialog, "Welcome to the Night Shift!");
        assert_eq!(snapshot.ambient_event, "Fan noises");
    }

    #[test]
    fn test_quiet_tick_does_not_render() {
        let mut shift = classic();
        shift.step(0.0, None);
        let step = shift.step(0.05, None);
        assert!(step.snapshot.is_none());
    }

    #[test]
    fn test_one_idle_second() {
        let mut shift = classic();
        shift.step(1.0, None);
        assert!((shift.power().level() - (99.0 - 0.141)).abs() < 1e-9);
    }

    #[test]
    fn test_quit_ends_without_mutation() {
        let mut shift = classic();
        shift.step(0.0, None);

        let step = shift.step(0.05, Some(Command::Quit));
        assert_eq!(step.status, ShiftStatus::Quit);
        let summary = step.summary.expect("quit must produce a summary");
        assert_eq!(summary.outcome, Outcome::Quit);
        assert_eq!(summary.final_state.view, View::Center);
    }

    #[test]
    fn test_terminal_state_is_frozen() {
        let mut shift = classic();
        shift.step(0.0, Some(Command::Quit));
        let elapsed = shift.elapsed();

        let step = shift.step(100.0, Some(Command::LookLeft));
        assert_eq!(step, Step::idle(ShiftStatus::Quit));
        assert_eq!(shift.elapsed(), elapsed);
        assert_eq!(shift.facility().view(), View::Center);
    }

    #[test]
    fn test_win_appends_victory_line() {
        let mut shift = classic();
        let step = shift.step(85.0 * 6.0, None);

        assert_eq!(step.status, ShiftStatus::Won);
        let summary = step.summary.unwrap();
        assert_eq!(summary.outcome, Outcome::Survived);
        assert_eq!(summary.hours_survived, 6);
        assert_eq!(
            shift.notifications().dialog.len(),
            6,
            "victory line joins the back of the onboarding queue"
        );
    }

    #[test]
    fn test_negative_delta_treated_as_zero() {
        let mut shift = classic();
        shift.step(-5.0, None);
        assert_eq!(shift.power().level(), 99.0);
        assert_eq!(shift.elapsed(), 0.0);
    }
}
