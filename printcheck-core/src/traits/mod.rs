//! Collaborator traits
//!
//! These traits define the interface between the self-check logic and the
//! firmware subsystems it drives. Board-level traits (pins, watchdog,
//! clock) come from `printcheck-hal` and are re-exported here.

pub mod display;
pub mod motion;
pub mod probe;
pub mod thermal;

pub use display::CheckDisplay;
pub use motion::{Axis, MotionControl};
pub use printcheck_hal::{Clock, InputPin, Watchdog};
pub use probe::{Endstop, EndstopProbe};
pub use thermal::{Heater, HeaterChannel, SensorError, ThermalControl};
