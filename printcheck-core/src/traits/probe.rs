//! Endstop probe trait

use super::motion::Axis;

/// Switch inputs read by the self check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Endstop {
    /// X minimum endstop
    XMin,
    /// Y minimum endstop
    YMin,
    /// Servo / bed probe switch (Z2 min on most boards)
    Probe,
}

impl Endstop {
    /// Homing endstop for an axis
    pub const fn min_of(axis: Axis) -> Self {
        match axis {
            Axis::X => Endstop::XMin,
            Axis::Y => Endstop::YMin,
        }
    }
}

/// Digital endstop reader
///
/// Implementations report the logical state with polarity already applied:
/// `true` means the switch is triggered, regardless of wiring.
pub trait EndstopProbe {
    /// Check if the endstop is currently triggered
    fn is_triggered(&mut self, endstop: Endstop) -> bool;
}
