//! Single endstop switch
//!
//! Turns a raw pin level into "triggered", applying the switch polarity
//! from board config.

use printcheck_core::config::PinConfig;
use printcheck_hal::InputPin;

/// Polarity-corrected endstop switch
pub struct EndstopInput<P> {
    pin: P,
    /// If true, triggered = pin LOW
    inverted: bool,
}

impl<P: InputPin> EndstopInput<P> {
    /// Create a new endstop input
    ///
    /// # Arguments
    /// - `pin`: The GPIO input the switch is wired to
    /// - `inverted`: If true, the switch is triggered when the pin reads LOW
    pub fn new(pin: P, inverted: bool) -> Self {
        Self { pin, inverted }
    }

    /// Switch that pulls the pin high when triggered
    pub fn new_active_high(pin: P) -> Self {
        Self::new(pin, false)
    }

    /// Switch that pulls the pin low when triggered
    pub fn new_active_low(pin: P) -> Self {
        Self::new(pin, true)
    }

    /// Create with the polarity from a pin config
    pub fn from_config(pin: P, config: &PinConfig) -> Self {
        Self::new(pin, config.inverted)
    }

    /// Check if the switch is triggered
    pub fn is_triggered(&mut self) -> bool {
        self.pin.is_high() != self.inverted
    }

    /// Release the underlying pin
    pub fn into_inner(self) -> P {
        self.pin
    }
}

/// Adapter for `embedded-hal` 1.0 input pins
///
/// Read errors are logged and report the pin as low.
pub struct EmbeddedHalInput<P>(pub P);

impl<P: embedded_hal::digital::InputPin> InputPin for EmbeddedHalInput<P> {
    fn is_high(&mut self) -> bool {
        match self.0.is_high() {
            Ok(high) => high,
            Err(_) => {
                #[cfg(feature = "defmt")]
                defmt::warn!("endstop pin read failed, treating as low");
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::convert::Infallible;

    /// Mock GPIO pin for testing
    struct MockPin {
        high: bool,
    }

    impl InputPin for MockPin {
        fn is_high(&mut self) -> bool {
            self.high
        }
    }

    struct EhPin {
        level: Result<bool, EhError>,
    }

    #[derive(Debug)]
    struct EhError;

    impl embedded_hal::digital::Error for EhError {
        fn kind(&self) -> embedded_hal::digital::ErrorKind {
            embedded_hal::digital::ErrorKind::Other
        }
    }

    impl embedded_hal::digital::ErrorType for EhPin {
        type Error = EhError;
    }

    impl embedded_hal::digital::InputPin for EhPin {
        fn is_high(&mut self) -> Result<bool, Self::Error> {
            match &self.level {
                Ok(level) => Ok(*level),
                Err(_) => Err(EhError),
            }
        }

        fn is_low(&mut self) -> Result<bool, Self::Error> {
            self.is_high().map(|h| !h)
        }
    }

    struct InfalliblePin(bool);

    impl embedded_hal::digital::ErrorType for InfalliblePin {
        type Error = Infallible;
    }

    impl embedded_hal::digital::InputPin for InfalliblePin {
        fn is_high(&mut self) -> Result<bool, Self::Error> {
            Ok(self.0)
        }

        fn is_low(&mut self) -> Result<bool, Self::Error> {
            Ok(!self.0)
        }
    }

    #[test]
    fn test_active_high_endstop() {
        let mut endstop = EndstopInput::new_active_high(MockPin { high: false });
        assert!(!endstop.is_triggered());

        endstop.pin.high = true;
        assert!(endstop.is_triggered());
    }

    #[test]
    fn test_active_low_endstop() {
        let mut endstop = EndstopInput::new_active_low(MockPin { high: true });
        assert!(!endstop.is_triggered());

        endstop.pin.high = false;
        assert!(endstop.is_triggered());
    }

    #[test]
    fn test_polarity_from_config() {
        let config = PinConfig::inverted(7);
        let mut endstop = EndstopInput::from_config(MockPin { high: false }, &config);
        assert!(endstop.is_triggered());
        assert!(!endstop.into_inner().high);
    }

    #[test]
    fn test_embedded_hal_pin_levels() {
        let mut high = EmbeddedHalInput(InfalliblePin(true));
        let mut low = EmbeddedHalInput(InfalliblePin(false));
        assert!(InputPin::is_high(&mut high));
        assert!(InputPin::is_low(&mut low));
    }

    #[test]
    fn test_embedded_hal_error_reads_low() {
        let mut pin = EmbeddedHalInput(EhPin { level: Err(EhError) });
        assert!(!InputPin::is_high(&mut pin));

        let mut endstop = EndstopInput::new_active_low(EmbeddedHalInput(EhPin {
            level: Ok(false),
        }));
        assert!(endstop.is_triggered());
    }
}
