//! Simulation core
//!
//! Everything here is deterministic and delta-driven: the same sequence of
//! deltas and commands always produces the same shift.

pub mod cameras;
pub mod clock;
pub mod facility;
pub mod hours;
pub mod notifications;
pub mod power;
pub mod session;
pub mod snapshot;

pub use clock::{Clock, FixedStepClock, WallClock};
pub use facility::{FacilityState, SideSystems};
pub use session::{InputSource, RenderSink, Shift, SimulationLoop, Step};
pub use snapshot::{CameraFeed, ShiftSummary, Snapshot};
