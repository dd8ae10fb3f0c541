//! Motion queue trait
//!
//! The self check only ever issues a handful of single-axis moves and then
//! waits for the planner to empty. Acceleration, kinematics and homing
//! strategy all stay inside the motion system.

use printcheck_hal::Watchdog;

/// Axes exercised by the homing checks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Axis {
    X,
    Y,
}

impl Axis {
    /// G-code letter for this axis
    pub const fn letter(self) -> char {
        match self {
            Axis::X => 'X',
            Axis::Y => 'Y',
        }
    }
}

/// Motion system as seen by the self check
///
/// Distances are millimetres, feed rates mm/min. Enqueue methods return
/// immediately; completion is observed through [`has_pending_moves`].
///
/// [`has_pending_moves`]: MotionControl::has_pending_moves
pub trait MotionControl {
    /// Queue a move relative to the current position
    fn relative_move(&mut self, axis: Axis, distance_mm: f32, feed_mm_min: u16);

    /// Queue a homing move for one axis
    fn home(&mut self, axis: Axis);

    /// Queue a move to an absolute position
    fn move_to(&mut self, axis: Axis, position_mm: f32, feed_mm_min: u16);

    /// Check if the planner still has blocks queued or executing
    fn has_pending_moves(&self) -> bool;

    /// Block until the planner is empty
    ///
    /// This is a deliberate busy-wait on the control thread. The watchdog is
    /// refreshed on every iteration so a long move cannot reset the board.
    /// How long this takes is bounded by the motion system, not the caller.
    fn wait_for_drain<W: Watchdog>(&mut self, watchdog: &mut W) {
        while self.has_pending_moves() {
            watchdog.refresh();
        }
    }
}
