//! UI-side state that the simulation does not track

use std::collections::VecDeque;

use crate::simulation::snapshot::Snapshot;

/// Maximum sound log entries to keep
const MAX_LOG_ENTRIES: usize = 8;

/// One heard sound
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    pub hour_label: String,
    pub message: String,
}

/// Recent ambient events, newest first
#[derive(Debug, Default)]
pub struct SoundLog {
    entries: VecDeque<LogEntry>,
    last_heard: Option<String>,
}

impl SoundLog {
    pub fn new() -> Self {
        Self {
            entries: VecDeque::with_capacity(MAX_LOG_ENTRIES),
            last_heard: None,
        }
    }

    /// Record the snapshot's ambient line if it differs from the last one seen
    pub fn observe(&mut self, snapshot: &Snapshot, default_text: &str) {
        if self.last_heard.as_deref() == Some(snapshot.ambient_event.as_str()) {
            return;
        }
        self.last_heard = Some(snapshot.ambient_event.clone());

        if snapshot.ambient_event == default_text {
            return;
        }
        if self.entries.len() >= MAX_LOG_ENTRIES {
            self.entries.pop_back();
        }
        self.entries.push_front(LogEntry {
            hour_label: snapshot.hour_label.clone(),
            message: snapshot.ambient_event.clone(),
        });
    }

    pub fn entries(&self) -> impl Iterator<Item = &LogEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::ShiftConfig;
    use crate::simulation::session::Shift;

    fn with_event(text: &str) -> Snapshot {
        let mut snapshot = Shift::new(&ShiftConfig::classic()).snapshot();
        snapshot.ambient_event = text.to_string();
        snapshot
    }

    #[test]
    fn test_skips_default_and_repeats() {
        let mut log = SoundLog::new();
        log.observe(&with_event("Fan noises"), "Fan noises");
        log.observe(&with_event("Door toggled"), "Fan noises");
        log.observe(&with_event("Door toggled"), "Fan noises");

        assert_eq!(log.len(), 1);
        assert_eq!(log.entries().next().unwrap().message, "Door toggled");
    }

    #[test]
    fn test_same_event_after_default_is_logged_again() {
        let mut log = SoundLog::new();
        log.observe(&with_event("Door toggled"), "Fan noises");
        log.observe(&with_event("Fan noises"), "Fan noises");
        log.observe(&with_event("Door toggled"), "Fan noises");
        assert_eq!(log.len(), 2);
    }

    #[test]
    fn test_capped() {
        let mut log = SoundLog::new();
        for i in 0..20 {
            log.observe(&with_event(&format!("Camera {} activated", i % 11 + 1)), "Fan noises");
        }
        assert_eq!(log.len(), MAX_LOG_ENTRIES);
        assert_eq!(log.entries().next().unwrap().message, "Camera 9 activated");
    }
}
