//! Sensor subsystem: the scalar [`Sensor`] and the aggregating [`SensorHub`].
//!
//! The hub owns exactly one sensor per [`SensorKind`] and produces a
//! [`SensorSnapshot`] on demand.

pub mod kind;
pub mod sensor;

pub use kind::SensorKind;
pub use sensor::{Sensor, SensorUpdate};

use serde::Serialize;

use crate::error::SensorError;

/// A point-in-time snapshot of every sensor in the system.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct SensorSnapshot {
    /// Fuel line pressure (bar).
    pub pressure_bar: f64,
    /// Fuel level; 1 = full, anything else = empty.
    pub fuel_level: f64,
    /// Engine temperature (°C).
    pub temperature_c: f64,
    /// Intake air mass flow (g/s).
    pub air_mass_g_per_s: f64,
    /// Exhaust oxygen level (%).
    pub oxygen_pct: f64,
    /// Emissions level (%).
    pub emissions_pct: f64,
    /// Filter contamination; 1 = contaminated.
    pub filter_contamination: f64,
    /// Crankshaft speed (rpm).
    pub crankshaft_rpm: f64,
}

/// Owns one sensor of every kind.
pub struct SensorHub {
    sensors: [Sensor; SensorKind::COUNT],
}

impl SensorHub {
    pub fn new() -> Self {
        Self {
            sensors: SensorKind::ALL.map(Sensor::new),
        }
    }

    pub fn sensor(&self, kind: SensorKind) -> &Sensor {
        &self.sensors[kind as usize]
    }

    pub fn value(&self, kind: SensorKind) -> f64 {
        self.sensor(kind).value()
    }

    /// Update one sensor. A rejected reading leaves the hub unchanged.
    pub fn update(&mut self, kind: SensorKind, value: f64) -> Result<SensorUpdate, SensorError> {
        self.sensors[kind as usize].update(value)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Sensor> {
        self.sensors.iter()
    }

    pub fn snapshot(&self) -> SensorSnapshot {
        SensorSnapshot {
            pressure_bar: self.value(SensorKind::Pressure),
            fuel_level: self.value(SensorKind::FuelLevel),
            temperature_c: self.value(SensorKind::Temperature),
            air_mass_g_per_s: self.value(SensorKind::AirMass),
            oxygen_pct: self.value(SensorKind::Oxygen),
            emissions_pct: self.value(SensorKind::Emissions),
            filter_contamination: self.value(SensorKind::FilterContamination),
            crankshaft_rpm: self.value(SensorKind::Crankshaft),
        }
    }
}

impl Default for SensorHub {
    fn default() -> Self {
        Self::new()
    }
}
