//! Thermal manager traits

/// Heaters the self check knows about
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Heater {
    /// Hotend 0
    Nozzle,
    /// Heated bed
    Bed,
}

/// Errors that can occur with temperature sensing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SensorError {
    /// Sensor disconnected (open circuit)
    OpenCircuit,
    /// Sensor shorted to ground
    ShortCircuit,
    /// Reading out of expected range
    OutOfRange,
    /// ADC conversion error
    ConversionError,
}

/// Thermal manager as seen by the self check
///
/// Temperatures are degrees Celsius. A missing or faulty sensor is expected
/// to read far below zero rather than return an error; the self check treats
/// anything under its sensor floor as "sensor absent".
pub trait ThermalControl {
    /// Current measured temperature
    fn current_celsius(&mut self, heater: Heater) -> f32;

    /// Current target temperature (0 = off)
    fn target_celsius(&self, heater: Heater) -> f32;

    /// Set a new target temperature
    fn set_target(&mut self, heater: Heater, celsius: f32);

    /// Arm thermal runaway / heating watch for a freshly set target
    fn begin_monitoring(&mut self, heater: Heater);
}

/// A single closed-loop heater
///
/// Implemented by whatever owns one heater's sensor and setpoint.
/// `printcheck-drivers` combines two of these into a [`ThermalControl`].
pub trait HeaterChannel {
    /// Read the current temperature
    fn read_celsius(&mut self) -> Result<f32, SensorError>;

    /// Get the current target temperature
    fn target_celsius(&self) -> f32;

    /// Set the target temperature
    fn set_target_celsius(&mut self, celsius: f32);

    /// Start watching for the temperature to move toward the target
    fn start_watching(&mut self);
}
