//! Terminal front ends: keyboard input and two renderers

pub mod display;
pub mod input;
pub mod plain;
pub mod state;
pub mod terminal;

pub use input::KeyboardInput;
pub use plain::PlainRenderer;
pub use state::{LogEntry, SoundLog};
pub use terminal::{TerminalGuard, TerminalRenderer};

use std::time::{Duration, Instant};

use crate::core::error::Result;
use crate::core::types::ShiftStatus;
use crate::simulation::clock::Clock;
use crate::simulation::session::{InputSource, RenderSink, SimulationLoop};

/// Tick the loop at a fixed frame interval until the shift ends
pub fn run_paced<C, I, R>(sim: &mut SimulationLoop<C, I, R>, frame: Duration) -> Result<ShiftStatus>
where
    C: Clock,
    I: InputSource,
    R: RenderSink,
{
    loop {
        let started = Instant::now();
        let status = sim.tick()?;
        if status.is_terminal() {
            return Ok(status);
        }
        std::thread::sleep(frame.saturating_sub(started.elapsed()));
    }
}
