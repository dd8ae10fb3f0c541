//! Printer self check
//!
//! Walks a fixed list of diagnostics (thermistors, heater response, X/Y
//! homing, probe switch) from the control loop and reports a verdict per
//! step. No failure stops the run; every step always moves on to the next.

pub mod fault;
pub mod results;
pub mod sequencer;
pub mod step;

pub use fault::{CheckFault, HomingStage};
pub use results::CheckResults;
pub use sequencer::{
    ExitDecision, HeatProbe, Machine, Phase, SelfCheck, CHECKING_FRAMES, HEAT_SOAK_MS,
};
pub use step::{CheckStep, StepResult, STEP_COUNT};
