//! Endstop inputs

pub mod bank;
pub mod input;

pub use bank::EndstopBank;
pub use input::{EmbeddedHalInput, EndstopInput};
