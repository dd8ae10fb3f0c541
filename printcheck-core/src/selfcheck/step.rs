//! Check step identifiers and per-step outcomes

use super::fault::CheckFault;
use crate::traits::{Axis, Heater};

/// Number of steps in a full self check
pub const STEP_COUNT: usize = 7;

/// One row of the self check, in execution order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CheckStep {
    /// Hotend thermistor present
    NozzleTempRead,
    /// Bed thermistor present
    BedTempRead,
    /// Hotend temperature moves when the target changes
    NozzleHeatResponse,
    /// Bed temperature moves when the target changes
    BedHeatResponse,
    /// X endstop and homing
    HomeX,
    /// Y endstop and homing
    HomeY,
    /// Servo / probe switch at rest
    ServoEndstop,
}

impl CheckStep {
    /// Every step, in execution order
    pub const ALL: [CheckStep; STEP_COUNT] = [
        CheckStep::NozzleTempRead,
        CheckStep::BedTempRead,
        CheckStep::NozzleHeatResponse,
        CheckStep::BedHeatResponse,
        CheckStep::HomeX,
        CheckStep::HomeY,
        CheckStep::ServoEndstop,
    ];

    /// First step of a run
    pub const FIRST: CheckStep = CheckStep::NozzleTempRead;

    /// Position in the run (0-based)
    pub const fn index(self) -> usize {
        self as usize
    }

    /// The step that follows this one, or `None` after the last
    pub const fn next(self) -> Option<CheckStep> {
        match self {
            CheckStep::NozzleTempRead => Some(CheckStep::BedTempRead),
            CheckStep::BedTempRead => Some(CheckStep::NozzleHeatResponse),
            CheckStep::NozzleHeatResponse => Some(CheckStep::BedHeatResponse),
            CheckStep::BedHeatResponse => Some(CheckStep::HomeX),
            CheckStep::HomeX => Some(CheckStep::HomeY),
            CheckStep::HomeY => Some(CheckStep::ServoEndstop),
            CheckStep::ServoEndstop => None,
        }
    }

    /// Short row label for text displays
    pub const fn label(self) -> &'static str {
        match self {
            CheckStep::NozzleTempRead => "Nozzle temp",
            CheckStep::BedTempRead => "Bed temp",
            CheckStep::NozzleHeatResponse => "Nozzle heating",
            CheckStep::BedHeatResponse => "Bed heating",
            CheckStep::HomeX => "X axis",
            CheckStep::HomeY => "Y axis",
            CheckStep::ServoEndstop => "Probe",
        }
    }

    /// Heater exercised by this step, if any
    pub const fn heater(self) -> Option<Heater> {
        match self {
            CheckStep::NozzleTempRead | CheckStep::NozzleHeatResponse => Some(Heater::Nozzle),
            CheckStep::BedTempRead | CheckStep::BedHeatResponse => Some(Heater::Bed),
            _ => None,
        }
    }

    /// Axis exercised by this step, if any
    pub const fn axis(self) -> Option<Axis> {
        match self {
            CheckStep::HomeX => Some(Axis::X),
            CheckStep::HomeY => Some(Axis::Y),
            _ => None,
        }
    }

    /// Steps that block the control loop while moving the toolhead
    pub const fn is_homing(self) -> bool {
        matches!(self, CheckStep::HomeX | CheckStep::HomeY)
    }
}

/// Outcome of a single step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum StepResult {
    /// Not run yet in this cycle
    #[default]
    Unknown,
    /// Step passed
    Pass,
    /// Step failed for the given reason
    Fail(CheckFault),
}

impl StepResult {
    /// Check if the step has produced a verdict
    pub const fn is_known(self) -> bool {
        !matches!(self, StepResult::Unknown)
    }

    /// Check if the step passed
    pub const fn is_pass(self) -> bool {
        matches!(self, StepResult::Pass)
    }

    /// Check if the step failed
    pub const fn is_fail(self) -> bool {
        matches!(self, StepResult::Fail(_))
    }

    /// Failure reason, if the step failed
    pub const fn fault(self) -> Option<CheckFault> {
        match self {
            StepResult::Fail(fault) => Some(fault),
            _ => None,
        }
    }
}
