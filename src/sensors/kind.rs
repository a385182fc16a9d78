//! Sensor kinds and their presentation.
//!
//! Every sensor in the system is the same scalar holder; the kind only
//! decides the display name, the unit and the status line written on update.

use core::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum SensorKind {
    Pressure = 0,
    FuelLevel = 1,
    Temperature = 2,
    AirMass = 3,
    Oxygen = 4,
    Emissions = 5,
    FilterContamination = 6,
    Crankshaft = 7,
}

impl SensorKind {
    /// Total number of kinds; sizes the hub.
    pub const COUNT: usize = 8;

    /// Every kind, in hub order.
    pub const ALL: [SensorKind; Self::COUNT] = [
        Self::Pressure,
        Self::FuelLevel,
        Self::Temperature,
        Self::AirMass,
        Self::Oxygen,
        Self::Emissions,
        Self::FilterContamination,
        Self::Crankshaft,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            Self::Pressure => "Pressure Sensor",
            Self::FuelLevel => "Fuel Level Sensor",
            Self::Temperature => "Temperature Sensor",
            Self::AirMass => "Air Mass Sensor",
            Self::Oxygen => "Oxygen Sensor",
            Self::Emissions => "Emissions Sensor",
            Self::FilterContamination => "Filter Contamination Sensor",
            Self::Crankshaft => "Crankshaft Speed Sensor",
        }
    }

    /// Engineering unit, or `None` for the two on/off style sensors.
    pub const fn unit(self) -> Option<&'static str> {
        match self {
            Self::Pressure => Some("bar"),
            Self::Temperature => Some("°C"),
            Self::AirMass => Some("g/s"),
            Self::Oxygen | Self::Emissions => Some("%"),
            Self::Crankshaft => Some("rpm"),
            Self::FuelLevel | Self::FilterContamination => None,
        }
    }

    /// Physically plausible range `(min, max)`, inclusive.
    ///
    /// Readings outside it are still stored; the hub only warns.
    pub const fn plausible_range(self) -> (f64, f64) {
        match self {
            Self::Pressure | Self::AirMass | Self::Crankshaft => (0.0, f64::INFINITY),
            Self::Temperature => (-273.15, f64::INFINITY),
            Self::FuelLevel | Self::FilterContamination => (0.0, 1.0),
            Self::Oxygen | Self::Emissions => (0.0, 100.0),
        }
    }

    pub fn is_plausible(self, value: f64) -> bool {
        let (min, max) = self.plausible_range();
        (min..=max).contains(&value)
    }

    /// Status line produced when a sensor of this kind takes `value`.
    pub fn describe(self, value: f64) -> String {
        match self {
            Self::Pressure => format!("Pressure updated to {value} bar"),
            Self::FuelLevel => {
                format!("Fuel level is {}", if value == 1.0 { "full" } else { "empty" })
            }
            Self::Temperature => format!("Temperature updated to {value} °C"),
            Self::AirMass => format!("Air mass updated to {value} g/s"),
            Self::Oxygen => format!("Oxygen level updated to {value}%"),
            Self::Emissions => format!("Emissions level updated to {value}%"),
            Self::FilterContamination => format!(
                "Filter is {}",
                if value == 1.0 { "contaminated" } else { "clean" }
            ),
            Self::Crankshaft => format!("Crankshaft speed updated to {value} rpm"),
        }
    }
}

impl fmt::Display for SensorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
