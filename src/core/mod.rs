pub mod config;
pub mod error;
pub mod types;

pub use config::{Preset, ShiftConfig};
pub use error::{Result, ShiftError};
pub use types::{Outcome, ShiftStatus, Side, View};
