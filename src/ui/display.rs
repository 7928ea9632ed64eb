//! Text formatting shared by both renderers

use crate::core::types::{Side, View};
use crate::simulation::facility::SideSystems;
use crate::simulation::snapshot::{CameraFeed, ShiftSummary, Snapshot};

/// Cells in the usage meter
pub const USAGE_CELLS: u8 = 4;

/// Filled meter cells: one for the base load plus one per active system, capped
pub fn usage_bars(active_systems: u8) -> u8 {
    active_systems.saturating_add(1).min(USAGE_CELLS)
}

pub fn usage_meter(active_systems: u8) -> String {
    let bars = usage_bars(active_systems) as usize;
    format!(
        "[{}{}]",
        "|".repeat(bars),
        " ".repeat(USAGE_CELLS as usize - bars)
    )
}

pub fn event_line(snapshot: &Snapshot) -> String {
    format!("Last Sound: {}", snapshot.ambient_event)
}

pub fn power_text(snapshot: &Snapshot) -> String {
    format!("Power: {}%", snapshot.power_percent)
}

pub fn time_text(snapshot: &Snapshot) -> String {
    format!("Time: {}AM", snapshot.hour_label)
}

/// `Power: 98% [||  ]  Time: 12AM`
pub fn status_line(snapshot: &Snapshot) -> String {
    format!(
        "{} {}  {}",
        power_text(snapshot),
        usage_meter(snapshot.active_systems),
        time_text(snapshot)
    )
}

pub fn view_line(view: View) -> String {
    format!("View: {}", view.label())
}

pub fn camera_line(feed: &CameraFeed) -> String {
    format!("{}: {}", feed.camera.id, feed.camera.room)
}

pub fn side_line(side: Side, systems: &SideSystems) -> String {
    let name = match side {
        Side::Left => "Left",
        Side::Right => "Right",
    };
    format!(
        "{} Door: {}  Light: {}",
        name,
        if systems.door_closed { "Closed" } else { "Open" },
        if systems.light_on { "On" } else { "Off" }
    )
}

pub fn dialog_line(snapshot: &Snapshot) -> Option<String> {
    snapshot
        .has_dialog()
        .then(|| format!("[DIALOG] {}", snapshot.dialog))
}

/// Key hint shown under "Controls"
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControlHint {
    pub key: &'static str,
    pub action: &'static str,
}

const fn hint(key: &'static str, action: &'static str) -> ControlHint {
    ControlHint { key, action }
}

/// Controls that do something in the current state
pub fn control_hints(snapshot: &Snapshot) -> Vec<ControlHint> {
    if snapshot.view == View::CameraGrid {
        return vec![
            hint("1 2 3 4 5 6 7 8 9 0 -", "Switch camera"),
            hint("X", "Exit camera"),
            hint("Q", "Quit"),
        ];
    }

    let mut hints = vec![hint("A", "Look LEFT"), hint("D", "Look RIGHT")];
    if snapshot.view.side().is_some() {
        hints.push(hint("E", "Toggle door on this side"));
        hints.push(hint("R", "Toggle light on this side"));
        hints.push(hint("S", "Return to CENTER"));
    } else {
        hints.push(hint("W", "Open camera"));
    }
    hints.push(hint("Q", "Quit"));
    hints
}

pub fn summary_lines(summary: &ShiftSummary) -> Vec<String> {
    vec![
        summary.banner().to_string(),
        format!(
            "Reached {}AM with {}% power left after {:.0}s.",
            summary.final_state.hour_label,
            summary.final_state.power_percent,
            summary.elapsed_seconds
        ),
    ]
}

/// Full frame as plain lines, in drawing order
pub fn frame_lines(snapshot: &Snapshot) -> Vec<String> {
    let mut lines = vec![
        event_line(snapshot),
        status_line(snapshot),
        view_line(snapshot.view),
    ];

    if let Some(feed) = &snapshot.camera {
        lines.push(camera_line(feed));
    }

    lines.push(side_line(Side::Left, &snapshot.left));
    lines.push(side_line(Side::Right, &snapshot.right));

    lines.push("Controls:".to_string());
    for control in control_hints(snapshot) {
        lines.push(format!("  {} - {}", control.key, control.action));
    }

    if let Some(dialog) = dialog_line(snapshot) {
        lines.push(dialog);
    }
    lines
}
