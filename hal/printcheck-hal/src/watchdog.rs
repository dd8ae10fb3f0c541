//! Hardware watchdog abstraction
//!
//! Any code that busy-waits on the control thread must refresh the
//! watchdog at least once per timeout window or the MCU resets.

/// Independent hardware watchdog
pub trait Watchdog {
    /// Reload the watchdog counter
    fn refresh(&mut self);
}

impl<T: Watchdog + ?Sized> Watchdog for &mut T {
    fn refresh(&mut self) {
        (**self).refresh();
    }
}

/// Watchdog that does nothing
///
/// For boards without a watchdog enabled, and for host-side tools.
#[derive(Debug, Clone, Copy, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct NoWatchdog;

impl Watchdog for NoWatchdog {
    fn refresh(&mut self) {}
}
