//! GPIO pin abstractions
//!
//! Endstop and probe switches are plain digital inputs. Polarity is not
//! handled here: the raw electrical level is reported and the driver layer
//! decides what "triggered" means for a given switch.

/// Digital input pin
///
/// Takes `&mut self` to match `embedded-hal` 1.0, where some port
/// expanders need bus access to sample a pin.
pub trait InputPin {
    /// Check if the pin reads high (logic 1)
    fn is_high(&mut self) -> bool;

    /// Check if the pin reads low (logic 0)
    fn is_low(&mut self) -> bool {
        !self.is_high()
    }
}

impl<T: InputPin + ?Sized> InputPin for &mut T {
    fn is_high(&mut self) -> bool {
        (**self).is_high()
    }
}
