//! Fuel pump control.
//!
//! The pump runs only when the fuel level reads exactly 0.  It is the one
//! unit whose setter evaluates immediately.

use super::{Action, ControlId, ControlUnit, Decision, Input};
use crate::error::SensorError;
use crate::sensors::SensorKind;

#[derive(Debug)]
pub struct FuelPump {
    fuel_level: Input,
    is_on: bool,
}

impl FuelPump {
    pub fn new() -> Self {
        Self {
            fuel_level: Input::new(SensorKind::FuelLevel),
            is_on: false,
        }
    }

    /// Store the fuel level and re-evaluate.
    pub fn set_fuel_level(&mut self, fuel_level: f64) -> Result<Decision, SensorError> {
        self.fuel_level.set(fuel_level)?;
        Ok(self.evaluate())
    }

    pub fn is_on(&self) -> bool {
        self.is_on
    }
}

impl Default for FuelPump {
    fn default() -> Self {
        Self::new()
    }
}

impl ControlUnit for FuelPump {
    fn id(&self) -> ControlId {
        ControlId::FuelPump
    }

    fn evaluate(&mut self) -> Decision {
        self.is_on = self.fuel_level.get() == 0.0;
        let action = if self.is_on {
            Action::PumpOn
        } else {
            Action::PumpOff
        };
        Decision::new(self.id(), action, self.fuel_level.is_live())
    }
}
