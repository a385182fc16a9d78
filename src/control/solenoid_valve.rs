//! Solenoid valve control: closes on high fuel line pressure.

use super::{Action, ControlId, ControlUnit, Decision, Input};
use crate::error::SensorError;
use crate::sensors::SensorKind;

#[derive(Debug)]
pub struct SolenoidValve {
    pressure: Input,
    close_above_bar: f64,
    is_open: bool,
}

impl SolenoidValve {
    /// `close_above_bar`: the valve closes when pressure is strictly above it.
    pub fn new(close_above_bar: f64) -> Self {
        Self {
            pressure: Input::new(SensorKind::Pressure),
            close_above_bar,
            is_open: false,
        }
    }

    pub fn set_pressure(&mut self, pressure_bar: f64) -> Result<(), SensorError> {
        self.pressure.set(pressure_bar)
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }
}

impl ControlUnit for SolenoidValve {
    fn id(&self) -> ControlId {
        ControlId::SolenoidValve
    }

    fn evaluate(&mut self) -> Decision {
        let high_pressure = self.pressure.get() > self.close_above_bar;
        self.is_open = !high_pressure;
        let action = if self.is_open {
            Action::ValveOpen
        } else {
            Action::ValveClosed
        };
        Decision::new(self.id(), action, self.pressure.is_live())
    }
}
