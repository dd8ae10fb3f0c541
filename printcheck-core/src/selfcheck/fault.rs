//! Diagnostic failure reasons
//!
//! These are outcomes shown to the operator, not errors. The sequencer
//! records them and moves on.

/// Stage of a homing check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum HomingStage {
    /// Short relative jog toward the endstop
    Jog,
    /// Homing move for the axis
    Home,
    /// Move off the endstop after homing
    BackOff,
}

impl HomingStage {
    /// Stages in execution order
    pub const ALL: [HomingStage; 3] = [HomingStage::Jog, HomingStage::Home, HomingStage::BackOff];

    /// Endstop state expected once the stage's move has finished
    pub const fn expects_triggered(self) -> bool {
        matches!(self, HomingStage::Jog)
    }
}

/// Why a step failed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CheckFault {
    /// Temperature reading implausibly low (no thermistor)
    SensorAbsent,
    /// Heater did not move the temperature within the soak window
    NoThermalResponse,
    /// Endstop did not read as expected after a homing stage
    EndstopMismatch(HomingStage),
    /// Probe switch reads triggered at rest
    ProbeTriggered,
}
