//! Nozzle and bed heater channels behind one thermal manager

use printcheck_core::traits::{Heater, HeaterChannel, ThermalControl};

/// Reading reported for a channel whose sensor returned an error
///
/// Well below any sensor floor, so the self check sees "sensor absent".
pub const SENSOR_FAULT_CELSIUS: f32 = -273.15;

/// [`ThermalControl`] over one nozzle and one bed channel
pub struct HeaterPair<N, B> {
    nozzle: N,
    bed: B,
}

impl<N: HeaterChannel, B: HeaterChannel> HeaterPair<N, B> {
    pub fn new(nozzle: N, bed: B) -> Self {
        Self { nozzle, bed }
    }

    pub fn nozzle(&self) -> &N {
        &self.nozzle
    }

    pub fn bed(&self) -> &B {
        &self.bed
    }

    pub fn into_inner(self) -> (N, B) {
        (self.nozzle, self.bed)
    }
}

impl<N: HeaterChannel, B: HeaterChannel> ThermalControl for HeaterPair<N, B> {
    fn current_celsius(&mut self, heater: Heater) -> f32 {
        let reading = match heater {
            Heater::Nozzle => self.nozzle.read_celsius(),
            Heater::Bed => self.bed.read_celsius(),
        };
        match reading {
            Ok(celsius) => celsius,
            Err(_e) => {
                #[cfg(feature = "defmt")]
                defmt::warn!("{} sensor error: {}", heater, _e);
                SENSOR_FAULT_CELSIUS
            }
        }
    }

    fn target_celsius(&self, heater: Heater) -> f32 {
        match heater {
            Heater::Nozzle => self.nozzle.target_celsius(),
            Heater::Bed => self.bed.target_celsius(),
        }
    }

    fn set_target(&mut self, heater: Heater, celsius: f32) {
        match heater {
            Heater::Nozzle => self.nozzle.set_target_celsius(celsius),
            Heater::Bed => self.bed.set_target_celsius(celsius),
        }
    }

    fn begin_monitoring(&mut self, heater: Heater) {
        match heater {
            Heater::Nozzle => self.nozzle.start_watching(),
            Heater::Bed => self.bed.start_watching(),
        }
    }
}
