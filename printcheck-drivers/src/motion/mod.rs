//! Motion adapters

pub mod gcode;

pub use gcode::{GcodeMotion, GcodeQueue, MAX_COMMAND_LEN};
