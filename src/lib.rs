//! Night Shift - Real-time night-shift survival simulation

pub mod command;
pub mod core;
pub mod simulation;
pub mod ui;
