//! Scrolling plain-text renderer
//!
//! Prints one block per snapshot to any writer. In raw mode the terminal does
//! not translate `\n`, so the line ending is configurable.

use std::io::Write;

use super::display;
use crate::core::error::Result;
use crate::simulation::session::RenderSink;
use crate::simulation::snapshot::{ShiftSummary, Snapshot};

const SEPARATOR: &str = "----------------------------------------";

pub struct PlainRenderer<W: Write> {
    out: W,
    newline: &'static str,
    frames: u64,
}

impl<W: Write> PlainRenderer<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            newline: "\n",
            frames: 0,
        }
    }

    /// Use `\r\n` line endings for terminals in raw mode
    pub fn raw_mode(mut self) -> Self {
        self.newline = "\r\n";
        self
    }

    /// Number of snapshots printed so far
    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_lines<I, S>(&mut self, lines: I) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for line in lines {
            write!(self.out, "{}{}", line.as_ref(), self.newline)?;
        }
        self.out.flush()?;
        Ok(())
    }
}

impl<W: Write> RenderSink for PlainRenderer<W> {
    fn present(&mut self, snapshot: &Snapshot) -> Result<()> {
        self.frames += 1;
        let mut lines = vec![SEPARATOR.to_string()];
        lines.extend(display::frame_lines(snapshot));
        self.write_lines(lines)
    }

    fn conclude(&mut self, summary: &ShiftSummary) -> Result<()> {
        let mut lines = vec![SEPARATOR.to_string()];
        lines.extend(display::summary_lines(summary));
        self.write_lines(lines)
    }
}
