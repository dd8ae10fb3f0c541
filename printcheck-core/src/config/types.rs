//! Self-check configuration type definitions
//!
//! Defaults reproduce the stock touchscreen self check. The heat soak time
//! is intentionally absent: it is fixed at [`HEAT_SOAK_MS`].
//!
//! [`HEAT_SOAK_MS`]: crate::selfcheck::HEAT_SOAK_MS

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::ConfigError;
use crate::traits::{Axis, Heater};

/// Smallest jog or back-off distance accepted (mm)
pub const MIN_MOVE_MM: f32 = 0.01;

/// Largest jog or back-off distance accepted (mm)
///
/// Together with [`MIN_MOVE_MM`] this keeps every move short enough to
/// render into a single fixed-size G-code line.
pub const MAX_MOVE_MM: f32 = 1000.0;

/// Check a signed move distance against the accepted magnitude range
fn move_in_range(distance_mm: f32) -> bool {
    (MIN_MOVE_MM..=MAX_MOVE_MM).contains(&distance_mm.abs())
}

/// Finite and strictly positive
fn positive(value: f32) -> bool {
    value.is_finite() && value > 0.0
}

/// How a heat-response delta is judged
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum DeltaMode {
    /// Any change in either direction counts
    Absolute,
    /// Only a rise counts; cooling below the baseline fails
    Rising,
}

/// Heat-response check settings for one heater
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct HeaterCheckConfig {
    /// Saved targets at or above this switch the heater off instead of
    /// raising it (°C)
    pub target_ceiling_c: f32,
    /// Probe target above the measured temperature (°C)
    pub probe_rise_c: f32,
    /// Minimum change after the soak to pass (°C)
    pub pass_delta_c: f32,
    /// How the change is measured
    pub delta: DeltaMode,
}

impl HeaterCheckConfig {
    /// Stock hotend settings
    pub const fn nozzle() -> Self {
        Self {
            target_ceiling_c: 245.0,
            probe_rise_c: 15.0,
            pass_delta_c: 5.0,
            delta: DeltaMode::Absolute,
        }
    }

    /// Stock bed settings
    pub const fn bed() -> Self {
        Self {
            target_ceiling_c: 90.0,
            probe_rise_c: 15.0,
            pass_delta_c: 3.0,
            delta: DeltaMode::Rising,
        }
    }

    /// Target to apply while probing
    ///
    /// Raises the heater above the current reading unless it was already
    /// set near its ceiling, in which case it is switched off; either way
    /// the temperature should move.
    pub fn probe_target(&self, saved_target_c: f32, current_c: f32) -> f32 {
        if saved_target_c < self.target_ceiling_c {
            current_c + self.probe_rise_c
        } else {
            0.0
        }
    }

    /// Judge the temperature change seen over the soak
    pub fn responded(&self, baseline_c: f32, measured_c: f32) -> bool {
        let delta = measured_c - baseline_c;
        match self.delta {
            DeltaMode::Absolute => delta.abs() >= self.pass_delta_c,
            DeltaMode::Rising => delta >= self.pass_delta_c,
        }
    }
}

/// Homing check settings for one axis
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AxisCheckConfig {
    /// Relative jog toward the endstop (mm, signed)
    pub jog_mm: f32,
    /// Jog feed rate (mm/min)
    pub jog_feed_mm_min: u16,
    /// Absolute position to move to after homing (mm)
    pub backoff_mm: f32,
    /// Back-off feed rate (mm/min)
    pub backoff_feed_mm_min: u16,
}

impl Default for AxisCheckConfig {
    fn default() -> Self {
        Self {
            jog_mm: 10.0,
            jog_feed_mm_min: 1200,
            backoff_mm: 5.0,
            backoff_feed_mm_min: 1500,
        }
    }
}

/// Complete self-check configuration
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SelfCheckConfig {
    /// Readings at or below this mean no sensor is fitted (°C)
    pub sensor_floor_c: f32,
    /// Hotend heat-response settings
    pub nozzle: HeaterCheckConfig,
    /// Bed heat-response settings
    pub bed: HeaterCheckConfig,
    /// X homing settings
    pub x: AxisCheckConfig,
    /// Y homing settings
    pub y: AxisCheckConfig,
}

impl Default for SelfCheckConfig {
    fn default() -> Self {
        Self {
            sensor_floor_c: -10.0,
            nozzle: HeaterCheckConfig::nozzle(),
            bed: HeaterCheckConfig::bed(),
            x: AxisCheckConfig::default(),
            y: AxisCheckConfig::default(),
        }
    }
}

impl SelfCheckConfig {
    /// Heat-response settings for a heater
    pub fn heater(&self, heater: Heater) -> &HeaterCheckConfig {
        match heater {
            Heater::Nozzle => &self.nozzle,
            Heater::Bed => &self.bed,
        }
    }

    /// Homing settings for an axis
    pub fn axis(&self, axis: Axis) -> &AxisCheckConfig {
        match axis {
            Axis::X => &self.x,
            Axis::Y => &self.y,
        }
    }

    /// Check that every value is usable
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.sensor_floor_c.is_finite() {
            return Err(ConfigError::Invalid("sensor_floor_c"));
        }

        for heater in [&self.nozzle, &self.bed] {
            if !heater.target_ceiling_c.is_finite() {
                return Err(ConfigError::Invalid("target_ceiling_c"));
            }
            if !positive(heater.pass_delta_c) {
                return Err(ConfigError::Invalid("pass_delta_c"));
            }
            if !positive(heater.probe_rise_c) {
                return Err(ConfigError::Invalid("probe_rise_c"));
            }
        }

        for axis in [&self.x, &self.y] {
            if !move_in_range(axis.jog_mm) {
                return Err(ConfigError::Invalid("jog_mm"));
            }
            if !move_in_range(axis.backoff_mm) {
                return Err(ConfigError::Invalid("backoff_mm"));
            }
            if axis.jog_feed_mm_min == 0 || axis.backoff_feed_mm_min == 0 {
                return Err(ConfigError::Invalid("feed_mm_min"));
            }
        }

        Ok(())
    }
}
