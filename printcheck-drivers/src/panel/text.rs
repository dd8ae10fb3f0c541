//! Text check panel
//!
//! Lays the self check out on a character display: one row per step with
//! the verdict right-aligned, and a status line underneath that doubles as
//! the start button label.
//!
//! ```text
//! Nozzle temp        OK
//! Bed temp           NG   <- error style
//! Nozzle heating     --
//! ...
//! Checking..
//! ```

use core::fmt::Write;

use heapless::String;
use printcheck_core::selfcheck::{CheckStep, StepResult, CHECKING_FRAMES, STEP_COUNT};
use printcheck_core::traits::CheckDisplay;

/// Characters per row
pub const PANEL_COLS: usize = 21;

/// Step rows plus the status line
pub const PANEL_ROWS: usize = STEP_COUNT + 1;

const STATUS_ROW: usize = STEP_COUNT;

/// Verdict text for a step row
pub const fn value_text(result: StepResult) -> &'static str {
    match result {
        StepResult::Unknown => "--",
        StepResult::Pass => "OK",
        StepResult::Fail(_) => "NG",
    }
}

/// Text buffer for the self-check screen
pub struct CheckPanel {
    lines: [String<PANEL_COLS>; PANEL_ROWS],
    /// Rows drawn in the error style
    errors: [bool; STEP_COUNT],
    /// Set on every change, cleared by the display task
    dirty: bool,
}

impl CheckPanel {
    /// Create a panel showing every step unchecked and the idle status
    pub fn new() -> Self {
        let mut panel = Self {
            lines: core::array::from_fn(|_| String::new()),
            errors: [false; STEP_COUNT],
            dirty: false,
        };
        panel.clear_results();
        panel.report_idle();
        panel
    }

    /// Get a line of text
    pub fn line(&self, row: usize) -> &str {
        self.lines.get(row).map(String::as_str).unwrap_or("")
    }

    /// Row for a step
    pub fn step_line(&self, step: CheckStep) -> &str {
        self.lines[step.index()].as_str()
    }

    /// Status line ("Start" or "Checking...")
    pub fn status(&self) -> &str {
        self.lines[STATUS_ROW].as_str()
    }

    /// Check if a step row uses the error style
    pub fn is_error(&self, step: CheckStep) -> bool {
        self.errors[step.index()]
    }

    /// Returns true once after any change
    pub fn take_dirty(&mut self) -> bool {
        core::mem::replace(&mut self.dirty, false)
    }

    fn set_row(&mut self, step: CheckStep, result: StepResult) {
        let label = step.label();
        let value = value_text(result);
        let pad = PANEL_COLS.saturating_sub(label.len() + value.len());

        let line = &mut self.lines[step.index()];
        line.clear();
        let _ = line.push_str(&label[..label.len().min(PANEL_COLS - value.len())]);
        for _ in 0..pad {
            let _ = line.push(' ');
        }
        let _ = line.push_str(value);

        self.errors[step.index()] = result.is_fail();
        self.dirty = true;
    }

    fn set_status(&mut self, text: &str) {
        let line = &mut self.lines[STATUS_ROW];
        line.clear();
        let _ = line.push_str(&text[..text.len().min(PANEL_COLS)]);
        self.dirty = true;
    }
}

impl Default for CheckPanel {
    fn default() -> Self {
        Self::new()
    }
}

impl CheckDisplay for CheckPanel {
    fn clear_results(&mut self) {
        for step in CheckStep::ALL {
            self.set_row(step, StepResult::Unknown);
        }
    }

    fn report_result(&mut self, step: CheckStep, result: StepResult) {
        self.set_row(step, result);
    }

    fn report_checking(&mut self, frame: u8) {
        let mut text: String<PANEL_COLS> = String::new();
        let _ = text.push_str("Checking");
        for _ in 0..=(frame % CHECKING_FRAMES) {
            let _ = text.push('.');
        }
        self.set_status(&text);
    }

    fn report_idle(&mut self) {
        self.set_status("Start");
    }
}

impl core::fmt::Display for CheckPanel {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        for line in &self.lines {
            f.write_str(line)?;
            f.write_char('\n')?;
        }
        Ok(())
    }
}
