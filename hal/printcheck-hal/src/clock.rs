//! Monotonic time source

/// Millisecond clock
///
/// Must be monotonic. 64 bits so callers never have to handle wraparound.
pub trait Clock {
    /// Milliseconds since an arbitrary fixed epoch (usually boot)
    fn now_millis(&self) -> u64;

    /// Absolute time `delay_ms` from now
    fn deadline_after(&self, delay_ms: u64) -> u64 {
        self.now_millis().saturating_add(delay_ms)
    }

    /// Check whether an absolute deadline has been reached
    fn has_elapsed(&self, deadline: u64) -> bool {
        self.now_millis() >= deadline
    }
}

impl<T: Clock + ?Sized> Clock for &T {
    fn now_millis(&self) -> u64 {
        (**self).now_millis()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Fixed(u64);

    impl Clock for Fixed {
        fn now_millis(&self) -> u64 {
            self.0
        }
    }

    #[test]
    fn test_deadline_after() {
        let clock = Fixed(1_000);
        assert_eq!(clock.deadline_after(20_000), 21_000);
    }

    #[test]
    fn test_deadline_saturates() {
        let clock = Fixed(u64::MAX - 5);
        assert_eq!(clock.deadline_after(100), u64::MAX);
    }

    #[test]
    fn test_has_elapsed_is_inclusive() {
        let clock = Fixed(5_000);
        assert!(clock.has_elapsed(5_000));
        assert!(clock.has_elapsed(4_999));
        assert!(!clock.has_elapsed(5_001));
    }
}
