//! Hardware configuration types
//!
//! Pin assignments for the switches the self check reads.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::ConfigError;
use crate::traits::Endstop;

/// Pin configuration with optional inversion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PinConfig {
    /// GPIO pin number
    pub pin: u8,
    /// Pin is active-low (inverted)
    pub inverted: bool,
}

impl PinConfig {
    /// Create a new pin config
    pub const fn new(pin: u8) -> Self {
        Self {
            pin,
            inverted: false,
        }
    }

    /// Create an inverted (active-low) pin
    pub const fn inverted(pin: u8) -> Self {
        Self {
            pin,
            inverted: true,
        }
    }

    /// Parse a pin string from board config
    ///
    /// Supports formats:
    /// - "gpio11" -> pin 11
    /// - "!gpio12" -> pin 12, inverted (active-low)
    ///
    /// Pull-ups belong to the board's pin setup, so "^" is rejected.
    pub fn parse(s: &str) -> Result<Self, ConfigError> {
        let rest = s.trim();
        let (inverted, rest) = match rest.strip_prefix('!') {
            Some(tail) => (true, tail),
            None => (false, rest),
        };

        let digits = rest.strip_prefix("gpio").ok_or(ConfigError::InvalidPin)?;
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ConfigError::InvalidPin);
        }
        let pin = digits.parse().map_err(|_| ConfigError::InvalidPin)?;

        Ok(Self { pin, inverted })
    }
}

/// Endstop wiring used by the self check
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct EndstopHwConfig {
    /// X minimum endstop
    pub x_min: PinConfig,
    /// Y minimum endstop
    pub y_min: PinConfig,
    /// Servo / probe switch
    pub probe: PinConfig,
}

impl EndstopHwConfig {
    /// Pin for an endstop
    pub fn pin(&self, endstop: Endstop) -> &PinConfig {
        match endstop {
            Endstop::XMin => &self.x_min,
            Endstop::YMin => &self.y_min,
            Endstop::Probe => &self.probe,
        }
    }

    /// Check that no two switches share a pin
    pub fn validate(&self) -> Result<(), ConfigError> {
        let pins = [self.x_min.pin, self.y_min.pin, self.probe.pin];
        for (i, a) in pins.iter().enumerate() {
            if pins[i + 1..].contains(a) {
                return Err(ConfigError::Invalid("endstop pin reused"));
            }
        }
        Ok(())
    }
}
