//! Transient text channels
//!
//! Two independent channels are advanced by elapsed time:
//! - the ambient "last sound" line, which falls back to a default after a while
//! - the dialog box, a FIFO of lines shown one at a time

use std::collections::VecDeque;

use crate::core::config::{AmbientConfig, DialogConfig};
use crate::core::types::Seconds;

/// Short-lived background event text
#[derive(Debug, Clone)]
pub struct AmbientEvent {
    text: String,
    elapsed: Seconds,
    default_text: String,
    duration: Seconds,
}

impl AmbientEvent {
    pub fn new(default_text: impl Into<String>, duration: Seconds) -> Self {
        let default_text = default_text.into();
        Self {
            text: default_text.clone(),
            elapsed: 0.0,
            default_text,
            duration,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_default(&self) -> bool {
        self.text == self.default_text
    }

    /// Show `text` and restart the expiry timer, even if the text is unchanged.
    /// Returns true when the visible text changed.
    pub fn set(&mut self, text: impl Into<String>) -> bool {
        let text = text.into();
        self.elapsed = 0.0;
        if self.text == text {
            return false;
        }
        self.text = text;
        true
    }

    /// Returns true when the visible text changed
    pub fn advance(&mut self, delta: Seconds) -> bool {
        self.elapsed += delta;
        if self.elapsed < self.duration {
            return false;
        }

        self.elapsed = 0.0;
        if self.is_default() {
            false
        } else {
            self.text = self.default_text.clone();
            true
        }
    }
}

/// Narrative lines shown one after another
#[derive(Debug, Clone)]
pub struct DialogQueue {
    lines: VecDeque<String>,
    timer: Seconds,
    duration: Seconds,
}

impl DialogQueue {
    pub fn new(duration: Seconds) -> Self {
        Self {
            lines: VecDeque::new(),
            timer: 0.0,
            duration,
        }
    }

    pub fn seeded<I, S>(duration: Seconds, lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut queue = Self::new(duration);
        queue.lines.extend(lines.into_iter().map(Into::into));
        queue
    }

    /// Line currently on screen, empty when the queue is drained
    pub fn current(&self) -> &str {
        self.lines.front().map(String::as_str).unwrap_or("")
    }

    pub fn push(&mut self, line: impl Into<String>) {
        self.lines.push_back(line.into());
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Returns true when the head line was dequeued
    pub fn advance(&mut self, delta: Seconds) -> bool {
        if self.lines.is_empty() {
            return false;
        }

        self.timer += delta;
        let mut changed = false;
        while self.timer >= self.duration && !self.lines.is_empty() {
            self.timer -= self.duration;
            self.lines.pop_front();
            changed = true;
        }

        if self.lines.is_empty() {
            self.timer = 0.0;
        }
        changed
    }
}

/// Both channels, advanced together once per tick
#[derive(Debug, Clone)]
pub struct NotificationSystem {
    pub ambient: AmbientEvent,
    pub dialog: DialogQueue,
}

impl NotificationSystem {
    pub fn new(ambient: &AmbientConfig, dialog: &DialogConfig) -> Self {
        Self {
            ambient: AmbientEvent::new(ambient.default_text.clone(), ambient.duration),
            dialog: DialogQueue::seeded(dialog.duration, dialog.onboarding.iter().cloned()),
        }
    }

    /// Returns true when anything visible changed
    pub fn advance(&mut self, delta: Seconds) -> bool {
        let ambient_changed = self.ambient.advance(delta);
        let dialog_changed = self.dialog.advance(delta);
        ambient_changed || dialog_changed
    }
}
