//! The three switches the self check reads

use printcheck_core::config::EndstopHwConfig;
use printcheck_core::traits::{Endstop, EndstopProbe};
use printcheck_hal::InputPin;

use super::EndstopInput;

/// X min, Y min and probe switches
pub struct EndstopBank<X, Y, P> {
    pub x_min: EndstopInput<X>,
    pub y_min: EndstopInput<Y>,
    pub probe: EndstopInput<P>,
}

impl<X: InputPin, Y: InputPin, P: InputPin> EndstopBank<X, Y, P> {
    pub fn new(x_min: EndstopInput<X>, y_min: EndstopInput<Y>, probe: EndstopInput<P>) -> Self {
        Self {
            x_min,
            y_min,
            probe,
        }
    }

    /// Build from raw pins, applying the polarity from board config
    pub fn from_config(x_min: X, y_min: Y, probe: P, config: &EndstopHwConfig) -> Self {
        Self::new(
            EndstopInput::from_config(x_min, config.pin(Endstop::XMin)),
            EndstopInput::from_config(y_min, config.pin(Endstop::YMin)),
            EndstopInput::from_config(probe, config.pin(Endstop::Probe)),
        )
    }
}

impl<X: InputPin, Y: InputPin, P: InputPin> EndstopProbe for EndstopBank<X, Y, P> {
    fn is_triggered(&mut self, endstop: Endstop) -> bool {
        match endstop {
            Endstop::XMin => self.x_min.is_triggered(),
            Endstop::YMin => self.y_min.is_triggered(),
            Endstop::Probe => self.probe.is_triggered(),
        }
    }
}
