//! Plain-text Night Shift
//!
//! Same shift as the full-screen version, printed as a scrolling log of
//! frames. Keys are read in raw mode so no Enter is needed.

use std::io;
use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use serde::Serialize;

use night_shift::core::config::{Preset, ShiftConfig};
use night_shift::core::error::Result;
use night_shift::simulation::{Shift, ShiftSummary, SimulationLoop, WallClock};
use night_shift::ui::{self, display, KeyboardInput, PlainRenderer};

/// Plain-text Night Shift - one printed frame per change
#[derive(Parser, Debug)]
#[command(name = "night_shift_plain")]
#[command(about = "Scrolling plain-text version of Night Shift")]
struct Args {
    /// Built-in rule set: classic or escalating
    #[arg(long, default_value = "escalating")]
    preset: Preset,

    /// TOML file overriding the preset (see data/shifts/)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Frame interval in milliseconds
    #[arg(long, default_value_t = 50)]
    tick_ms: u64,

    /// Final summary format: text or json
    #[arg(long, default_value = "text")]
    format: String,
}

/// JSON output structure
#[derive(Serialize)]
struct SummaryOutput<'a> {
    preset: &'a str,
    frames: u64,
    #[serde(flatten)]
    summary: &'a ShiftSummary,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("night_shift=warn")),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    let config = ShiftConfig::resolve(args.preset, args.config.as_deref())?;

    enable_raw_mode()?;
    let mut sim = SimulationLoop::new(
        Shift::new(&config),
        WallClock::new(),
        KeyboardInput,
        PlainRenderer::new(io::stdout()).raw_mode(),
    );
    let result = ui::run_paced(&mut sim, Duration::from_millis(args.tick_ms));
    if let Err(err) = disable_raw_mode() {
        tracing::error!(?err, "failed to disable raw mode");
    }
    result?;

    let frames = sim.sink().frames();
    if let Some(summary) = sim.summary() {
        if args.format == "json" {
            let output = SummaryOutput {
                preset: args.preset.name(),
                frames,
                summary,
            };
            println!("{}", serde_json::to_string_pretty(&output)?);
        } else {
            for line in display::summary_lines(summary) {
                println!("{}", line);
            }
        }
    }
    Ok(())
}
