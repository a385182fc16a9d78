//! Safety shutdown system.
//!
//! Raises an emergency when emissions or engine temperature exceed their
//! limits.  Both comparisons are strict: a reading exactly at a limit is
//! normal.  Each tripped condition sets its bit in the cause mask so a
//! caller can tell which branch fired, including both at once.

use core::fmt;

use log::error;

use super::{Action, ControlId, ControlUnit, Decision, Input};
use crate::error::SensorError;
use crate::sensors::SensorKind;

/// Conditions that trip the shutdown, as bits in
/// [`Action::EmergencyShutdown`]'s `causes` mask.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ShutdownCause {
    /// Emissions level above limit.
    HighEmissions = 0b0000_0001,
    /// Engine temperature above limit.
    OverTemperature = 0b0000_0010,
}

impl ShutdownCause {
    /// Return the bitmask for this cause.
    pub const fn mask(self) -> u8 {
        self as u8
    }
}

impl fmt::Display for ShutdownCause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::HighEmissions => write!(f, "high emissions"),
            Self::OverTemperature => write!(f, "over temperature"),
        }
    }
}

#[derive(Debug)]
pub struct SafetyShutdownSystem {
    emissions: Input,
    temperature: Input,
    emissions_limit_pct: f64,
    temperature_limit_c: f64,
    is_emergency: bool,
}

impl SafetyShutdownSystem {
    pub fn new(emissions_limit_pct: f64, temperature_limit_c: f64) -> Self {
        Self {
            emissions: Input::new(SensorKind::Emissions),
            temperature: Input::new(SensorKind::Temperature),
            emissions_limit_pct,
            temperature_limit_c,
            is_emergency: false,
        }
    }

    pub fn set_emissions(&mut self, emissions_pct: f64) -> Result<(), SensorError> {
        self.emissions.set(emissions_pct)
    }

    pub fn set_temperature(&mut self, temperature_c: f64) -> Result<(), SensorError> {
        self.temperature.set(temperature_c)
    }

    pub fn is_emergency(&self) -> bool {
        self.is_emergency
    }

    fn tripped(&self) -> u8 {
        let mut causes = 0;
        if self.emissions.get() > self.emissions_limit_pct {
            causes |= ShutdownCause::HighEmissions.mask();
        }
        if self.temperature.get() > self.temperature_limit_c {
            causes |= ShutdownCause::OverTemperature.mask();
        }
        causes
    }
}

impl ControlUnit for SafetyShutdownSystem {
    fn id(&self) -> ControlId {
        ControlId::SafetyShutdownSystem
    }

    fn evaluate(&mut self) -> Decision {
        let causes = self.tripped();
        self.is_emergency = causes != 0;

        let action = if self.is_emergency {
            for cause in [ShutdownCause::HighEmissions, ShutdownCause::OverTemperature] {
                if causes & cause.mask() != 0 {
                    error!("SHUTDOWN: {cause}");
                }
            }
            Action::EmergencyShutdown { causes }
        } else {
            Action::Normal
        };
        let live = self.emissions.is_live() && self.temperature.is_live();
        Decision::new(self.id(), action, live)
    }
}
