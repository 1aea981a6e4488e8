//! Special relativity lab: a velocity control mapped onto a fraction of c,
//! the Lorentz factor derived from it, and a stationary/moving stopwatch pair.
//!
//! - `relativity`: velocity mapping and kinematic factors
//! - `clock`: tick-driven dual stopwatch
//! - `scheduler`: host "next frame" primitives
//! - `simulation`: the facade the front end drives
//! - `tui`: terminal front end
//! - `metrics`: sweep reports as CSV and PNG

pub mod clock;
pub mod config;
pub mod metrics;
pub mod relativity;
pub mod scheduler;
pub mod simulation;
pub mod tui;

pub use clock::{ClockState, DualClockAnimator};
pub use config::Config;
pub use relativity::{KinematicFactors, ScaleMode, VelocityControl};
pub use scheduler::{FrameScheduler, ManualScheduler, TickScheduler, TickToken};
pub use simulation::Simulation;
