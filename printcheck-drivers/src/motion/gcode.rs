//! Motion through the firmware's G-code queue
//!
//! Each motion request becomes a short G-code script that the host
//! firmware injects ahead of anything queued from the host or SD card.

use core::fmt::{self, Write};

use heapless::String;
use printcheck_core::traits::{Axis, MotionControl};

/// Longest script a single motion request produces
///
/// Fits any distance within [`MIN_MOVE_MM`]..=[`MAX_MOVE_MM`] at any feed
/// rate, which is what a validated config can ask for.
///
/// [`MIN_MOVE_MM`]: printcheck_core::config::MIN_MOVE_MM
/// [`MAX_MOVE_MM`]: printcheck_core::config::MAX_MOVE_MM
pub const MAX_COMMAND_LEN: usize = 48;

/// The firmware's command injection and planner state
pub trait GcodeQueue {
    /// Run one or more newline-separated commands immediately
    fn process_now(&mut self, commands: &str);

    /// Check if the planner still holds motion blocks
    fn has_blocks_queued(&self) -> bool;
}

impl<T: GcodeQueue> GcodeQueue for &mut T {
    fn process_now(&mut self, commands: &str) {
        T::process_now(self, commands)
    }

    fn has_blocks_queued(&self) -> bool {
        T::has_blocks_queued(self)
    }
}

/// [`MotionControl`] over a G-code queue
pub struct GcodeMotion<Q> {
    queue: Q,
}

impl<Q: GcodeQueue> GcodeMotion<Q> {
    pub fn new(queue: Q) -> Self {
        Self { queue }
    }

    pub fn queue(&self) -> &Q {
        &self.queue
    }

    pub fn into_inner(self) -> Q {
        self.queue
    }

    fn send(&mut self, args: fmt::Arguments<'_>) {
        let mut script: String<MAX_COMMAND_LEN> = String::new();
        if script.write_fmt(args).is_err() {
            #[cfg(feature = "defmt")]
            defmt::warn!("motion command too long, dropped");
            return;
        }
        self.queue.process_now(&script);
    }
}

impl<Q: GcodeQueue> MotionControl for GcodeMotion<Q> {
    fn relative_move(&mut self, axis: Axis, distance_mm: f32, feed_mm_min: u16) {
        self.send(format_args!(
            "G91\nG1 {}{} F{}\nG90",
            axis.letter(),
            distance_mm,
            feed_mm_min
        ));
    }

    fn home(&mut self, axis: Axis) {
        self.send(format_args!("G28 {}", axis.letter()));
    }

    fn move_to(&mut self, axis: Axis, position_mm: f32, feed_mm_min: u16) {
        self.send(format_args!(
            "G0 {}{} F{}",
            axis.letter(),
            position_mm,
            feed_mm_min
        ));
    }

    fn has_pending_moves(&self) -> bool {
        self.queue.has_blocks_queued()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::cell::Cell;
    use heapless::Vec;

    struct MockQueue {
        sent: Vec<String<MAX_COMMAND_LEN>, 8>,
        blocks: Cell<u8>,
    }

    impl MockQueue {
        fn new() -> Self {
            Self {
                sent: Vec::new(),
                blocks: Cell::new(0),
            }
        }
    }

    impl GcodeQueue for MockQueue {
        fn process_now(&mut self, commands: &str) {
            let mut owned = String::new();
            owned.push_str(commands).unwrap();
            self.sent.push(owned).unwrap();
            self.blocks.set(2);
        }

        fn has_blocks_queued(&self) -> bool {
            let left = self.blocks.get();
            if left == 0 {
                return false;
            }
            self.blocks.set(left - 1);
            true
        }
    }

    #[test]
    fn test_homing_sequence_scripts() {
        let mut motion = GcodeMotion::new(MockQueue::new());

        motion.relative_move(Axis::X, 10.0, 1200);
        motion.home(Axis::X);
        motion.move_to(Axis::X, 5.0, 1500);

        let sent = &motion.queue().sent;
        assert_eq!(sent.len(), 3);
        assert_eq!(sent[0].as_str(), "G91\nG1 X10 F1200\nG90");
        assert_eq!(sent[1].as_str(), "G28 X");
        assert_eq!(sent[2].as_str(), "G0 X5 F1500");
    }

    #[test]
    fn test_fractional_and_negative_distances() {
        let mut motion = GcodeMotion::new(MockQueue::new());

        motion.relative_move(Axis::Y, -2.5, 600);
        motion.move_to(Axis::Y, 0.5, 3000);

        let sent = &motion.queue().sent;
        assert_eq!(sent[0].as_str(), "G91\nG1 Y-2.5 F600\nG90");
        assert_eq!(sent[1].as_str(), "G0 Y0.5 F3000");
    }

    #[test]
    fn test_pending_follows_planner() {
        let mut queue = MockQueue::new();
        {
            let mut motion = GcodeMotion::new(&mut queue);
            assert!(!motion.has_pending_moves());

            motion.home(Axis::Y);
            assert!(motion.has_pending_moves());
            assert!(motion.has_pending_moves());
            assert!(!motion.has_pending_moves());
        }
        assert_eq!(queue.sent[0].as_str(), "G28 Y");
    }

    #[test]
    fn test_validated_extremes_fit_one_script() {
        use printcheck_core::config::{MAX_MOVE_MM, MIN_MOVE_MM};

        let mut motion = GcodeMotion::new(MockQueue::new());

        motion.relative_move(Axis::X, -MAX_MOVE_MM, u16::MAX);
        motion.move_to(Axis::Y, -MIN_MOVE_MM, u16::MAX);
        // Longest shortest-form rendering inside the range
        motion.relative_move(Axis::Y, -0.012_345_679, u16::MAX);
        motion.move_to(Axis::X, -999.999_94, u16::MAX);

        let sent = &motion.queue().sent;
        assert_eq!(sent.len(), 4);
        assert_eq!(sent[0].as_str(), "G91\nG1 X-1000 F65535\nG90");
        assert_eq!(sent[1].as_str(), "G0 Y-0.01 F65535");
    }

    #[test]
    fn test_oversized_script_is_dropped() {
        let mut motion = GcodeMotion::new(MockQueue::new());

        motion.move_to(Axis::X, f32::MAX, 1500);

        assert!(motion.into_inner().sent.is_empty());
    }
}
