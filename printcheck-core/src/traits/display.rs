//! Display surface for self-check results
//!
//! The sequencer never touches widgets. It reports what happened and the
//! UI layer decides how that looks.

use crate::selfcheck::{CheckStep, StepResult};

/// Result reporting surface
///
/// All calls are fire-and-forget. Implementations must not block.
pub trait CheckDisplay {
    /// Reset every result row to the "not run" state
    fn clear_results(&mut self);

    /// Show the outcome of one step
    fn report_result(&mut self, step: CheckStep, result: StepResult);

    /// Show the "checking" indicator at animation frame `frame` (0..=2)
    fn report_checking(&mut self, frame: u8);

    /// Show the idle prompt (ready to start)
    fn report_idle(&mut self);
}

impl<T: CheckDisplay + ?Sized> CheckDisplay for &mut T {
    fn clear_results(&mut self) {
        (**self).clear_results();
    }

    fn report_result(&mut self, step: CheckStep, result: StepResult) {
        (**self).report_result(step, result);
    }

    fn report_checking(&mut self, frame: u8) {
        (**self).report_checking(frame);
    }

    fn report_idle(&mut self) {
        (**self).report_idle();
    }
}
