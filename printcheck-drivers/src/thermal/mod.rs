//! Thermal manager adapters

pub mod pair;

pub use pair::{HeaterPair, SENSOR_FAULT_CELSIUS};
