//! System configuration parameters
//!
//! Decision thresholds for the control units and the sensor wiring policy.
//! Defaults reproduce the reference fuel system exactly.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// How sensor updates reach the control units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Wiring {
    /// Nothing is forwarded automatically. Only an explicit
    /// `FeedFuelPump` moves a reading into a control unit; the valve,
    /// injector and shutdown system evaluate their unset inputs.
    #[default]
    Legacy,
    /// Every sensor update is forwarded to the control unit that consumes it.
    Sensors,
}

/// Core system configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SystemConfig {
    // --- Solenoid valve ---
    /// Pressure (bar) above which the valve closes
    pub valve_close_pressure_bar: f64,

    // --- Injector ---
    /// Oxygen level (%) below which the injector is active
    pub injector_oxygen_limit_pct: f64,

    // --- Safety shutdown ---
    /// Emissions level (%) above which an emergency is raised
    pub emissions_limit_pct: f64,
    /// Temperature (Celsius) above which an emergency is raised
    pub temperature_limit_c: f64,

    // --- Wiring ---
    pub wiring: Wiring,
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            valve_close_pressure_bar: 5.0,
            injector_oxygen_limit_pct: 15.0,
            emissions_limit_pct: 80.0,
            temperature_limit_c: 90.0,
            wiring: Wiring::Legacy,
        }
    }
}

impl SystemConfig {
    /// Reject values that would make a rule meaningless.
    /// Nothing is clamped.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.valve_close_pressure_bar.is_finite() {
            return Err(ConfigError::ValidationFailed(
                "valve_close_pressure_bar must be finite",
            ));
        }
        if !self.injector_oxygen_limit_pct.is_finite() {
            return Err(ConfigError::ValidationFailed(
                "injector_oxygen_limit_pct must be finite",
            ));
        }
        if !self.emissions_limit_pct.is_finite() {
            return Err(ConfigError::ValidationFailed(
                "emissions_limit_pct must be finite",
            ));
        }
        if !self.temperature_limit_c.is_finite() {
            return Err(ConfigError::ValidationFailed(
                "temperature_limit_c must be finite",
            ));
        }
        Ok(())
    }
}
