//! Per-step result table

use super::step::{CheckStep, StepResult, STEP_COUNT};

/// Results of the current (or last) self-check run
///
/// Each entry is written at most once per run. [`reset`](Self::reset) is the
/// only way back to `Unknown`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CheckResults {
    results: [StepResult; STEP_COUNT],
}

impl CheckResults {
    /// Create a table with every step unknown
    pub const fn new() -> Self {
        Self {
            results: [StepResult::Unknown; STEP_COUNT],
        }
    }

    /// Forget every result
    pub fn reset(&mut self) {
        self.results = [StepResult::Unknown; STEP_COUNT];
    }

    /// Result for one step
    pub fn get(&self, step: CheckStep) -> StepResult {
        self.results[step.index()]
    }

    /// Record a verdict for a step
    ///
    /// Returns `false` and leaves the table untouched if the step already
    /// has a verdict or `result` is `Unknown`.
    pub(crate) fn record(&mut self, step: CheckStep, result: StepResult) -> bool {
        let slot = &mut self.results[step.index()];
        if slot.is_known() || !result.is_known() {
            return false;
        }
        *slot = result;
        true
    }

    /// Iterate `(step, result)` pairs in execution order
    pub fn iter(&self) -> impl Iterator<Item = (CheckStep, StepResult)> + '_ {
        CheckStep::ALL.iter().map(move |&step| (step, self.get(step)))
    }

    /// Number of passed steps
    pub fn passed(&self) -> usize {
        self.results.iter().filter(|r| r.is_pass()).count()
    }

    /// Number of failed steps
    pub fn failed(&self) -> usize {
        self.results.iter().filter(|r| r.is_fail()).count()
    }

    /// Check if every step has a verdict
    pub fn is_complete(&self) -> bool {
        self.results.iter().all(|r| r.is_known())
    }

    /// Check if every step passed
    pub fn all_passed(&self) -> bool {
        self.results.iter().all(|r| r.is_pass())
    }
}
