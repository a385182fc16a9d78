//! Inbound commands to the fuel system service.
//!
//! A driver is a sequence of these; [`REFERENCE_SCENARIO`] is the fixed
//! sequence the `fuelsys` binary runs.

use crate::control::ControlId;
use crate::sensors::SensorKind;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AppCommand {
    /// Store a reading on one sensor.
    UpdateSensor { kind: SensorKind, value: f64 },

    /// Hand the fuel-level sensor's value to the pump, which evaluates at once.
    FeedFuelPump,

    /// Evaluate a single control unit on its current inputs.
    Evaluate(ControlId),

    /// Evaluate every control unit in [`ControlId::ALL`] order.
    EvaluateAll,
}

/// Five sensor updates, then the pump feed and one evaluation of each
/// remaining unit.
pub const REFERENCE_SCENARIO: [AppCommand; 9] = [
    AppCommand::UpdateSensor {
        kind: SensorKind::Pressure,
        value: 3.5,
    },
    AppCommand::UpdateSensor {
        kind: SensorKind::FuelLevel,
        value: 1.0,
    },
    AppCommand::UpdateSensor {
        kind: SensorKind::Temperature,
        value: 75.0,
    },
    AppCommand::UpdateSensor {
        kind: SensorKind::Oxygen,
        value: 14.0,
    },
    AppCommand::UpdateSensor {
        kind: SensorKind::Emissions,
        value: 85.0,
    },
    AppCommand::FeedFuelPump,
    AppCommand::Evaluate(ControlId::SolenoidValve),
    AppCommand::Evaluate(ControlId::InjectorControl),
    AppCommand::Evaluate(ControlId::SafetyShutdownSystem),
];
