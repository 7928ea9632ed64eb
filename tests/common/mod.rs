//! Scripted input and recording renderer shared by the integration tests

#![allow(dead_code)]

use std::collections::VecDeque;

use night_shift::command::Command;
use night_shift::core::error::Result;
use night_shift::simulation::{InputSource, RenderSink, ShiftSummary, Snapshot};

/// Replays a fixed script, one entry per tick, then goes quiet
#[derive(Debug, Default)]
pub struct ScriptedInput {
    script: VecDeque<Option<Command>>,
    pub polls: usize,
}

impl ScriptedInput {
    pub fn new<I>(script: I) -> Self
    where
        I: IntoIterator<Item = Option<Command>>,
    {
        Self {
            script: script.into_iter().collect(),
            polls: 0,
        }
    }

    pub fn idle() -> Self {
        Self::default()
    }
}

impl InputSource for ScriptedInput {
    fn poll(&mut self) -> Result<Option<Command>> {
        self.polls += 1;
        Ok(self.script.pop_front().flatten())
    }
}

/// Keeps every snapshot and summary it is handed
#[derive(Debug, Default)]
pub struct RecordingSink {
    pub frames: Vec<Snapshot>,
    pub summaries: Vec<ShiftSummary>,
}

impl RenderSink for RecordingSink {
    fn present(&mut self, snapshot: &Snapshot) -> Result<()> {
        self.frames.push(snapshot.clone());
        Ok(())
    }

    fn conclude(&mut self, summary: &ShiftSummary) -> Result<()> {
        self.summaries.push(summary.clone());
        Ok(())
    }
}
