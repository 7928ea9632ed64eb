//! Night Shift - Full-screen terminal entry point
//!
//! Sets up logging, loads the shift configuration, takes over the terminal
//! and ticks the simulation until the night is survived, the power runs out
//! or the player quits.

use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::Duration;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use night_shift::core::config::{Preset, ShiftConfig};
use night_shift::core::error::Result;
use night_shift::core::types::Outcome;
use night_shift::simulation::{Shift, SimulationLoop, WallClock};
use night_shift::ui::{self, display, KeyboardInput, TerminalGuard, TerminalRenderer};

/// Night Shift - survive until morning on a failing power supply
#[derive(Parser, Debug)]
#[command(name = "night-shift")]
#[command(about = "Watch the cameras, work the doors, keep the power on")]
struct Args {
    /// Built-in rule set: classic or escalating
    #[arg(long, default_value = "classic")]
    preset: Preset,

    /// TOML file overriding the preset (see data/shifts/)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Frame interval in milliseconds
    #[arg(long, default_value_t = 50)]
    tick_ms: u64,

    /// Write logs here; nothing is logged otherwise
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.log_file.as_deref())?;

    let config = ShiftConfig::resolve(args.preset, args.config.as_deref())?;
    tracing::info!(preset = args.preset.name(), "Night Shift starting...");

    let guard = TerminalGuard::enter()?;
    let renderer = TerminalRenderer::stdout(config.ambient.default_text.clone())?;
    let mut sim = SimulationLoop::new(
        Shift::new(&config),
        WallClock::new(),
        KeyboardInput,
        renderer,
    );

    let result = ui::run_paced(&mut sim, Duration::from_millis(args.tick_ms));
    if sim.summary().is_some_and(|summary| summary.outcome != Outcome::Quit) {
        // Leave the final screen up briefly before restoring the terminal
        std::thread::sleep(Duration::from_millis(1500));
    }
    drop(guard);
    result?;

    if let Some(summary) = sim.summary() {
        for line in display::summary_lines(summary) {
            println!("{}", line);
        }
    }
    Ok(())
}

fn init_logging(log_file: Option<&Path>) -> Result<()> {
    let Some(path) = log_file else {
        return Ok(());
    };

    let file = File::create(path)?;
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("night_shift=info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .init();
    Ok(())
}
