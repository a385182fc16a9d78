//! Control units: threshold rules that turn their inputs into a [`Decision`].
//!
//! Every unit implements [`ControlUnit`].  Evaluation is a single snapshot
//! comparison: no hysteresis, no debouncing, no retry.  Inputs are set
//! through explicit per-unit setters, which reject NaN and infinities the
//! same way a sensor does; an input that was never set reads as 0 and the
//! resulting decision is marked as not live.

pub mod fuel_pump;
pub mod injector;
pub mod shutdown;
pub mod solenoid_valve;

pub use fuel_pump::FuelPump;
pub use injector::InjectorControl;
pub use shutdown::{SafetyShutdownSystem, ShutdownCause};
pub use solenoid_valve::SolenoidValve;

use core::fmt;

use log::{debug, warn};
use serde::Serialize;

use crate::error::SensorError;
use crate::sensors::SensorKind;

// ---------------------------------------------------------------------------
// Identity
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum ControlId {
    FuelPump = 0,
    SolenoidValve = 1,
    InjectorControl = 2,
    SafetyShutdownSystem = 3,
}

impl ControlId {
    pub const COUNT: usize = 4;

    /// Every unit, in evaluation order.
    pub const ALL: [ControlId; Self::COUNT] = [
        Self::FuelPump,
        Self::SolenoidValve,
        Self::InjectorControl,
        Self::SafetyShutdownSystem,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            Self::FuelPump => "Fuel Pump",
            Self::SolenoidValve => "Solenoid Valve",
            Self::InjectorControl => "Injector Control",
            Self::SafetyShutdownSystem => "Safety Shutdown System",
        }
    }
}

impl fmt::Display for ControlId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ---------------------------------------------------------------------------
// Decision
// ---------------------------------------------------------------------------

/// What a control unit decided on its last evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    PumpOn,
    PumpOff,
    ValveOpen,
    ValveClosed,
    InjectorActive,
    InjectorInactive,
    /// Bitmask of [`ShutdownCause`]s that tripped.
    EmergencyShutdown { causes: u8 },
    Normal,
}

impl Action {
    pub const fn message(self) -> &'static str {
        match self {
            Self::PumpOn => "Fuel Pump is ON due to low fuel level.",
            Self::PumpOff => "Fuel Pump is OFF.",
            Self::ValveOpen => "Solenoid Valve is OPEN.",
            Self::ValveClosed => "Solenoid Valve is CLOSED due to high pressure.",
            Self::InjectorActive => "Injector Control is active",
            Self::InjectorInactive => "Injector Control is inactive",
            Self::EmergencyShutdown { .. } => "Emergency shutdown initiated!",
            Self::Normal => "System is operating normally.",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Decision {
    pub unit: ControlId,
    pub action: Action,
    /// False if any input the rule read had never been set.
    pub live: bool,
}

impl Decision {
    /// Build a decision and log it; evaluations on unset inputs warn.
    pub(crate) fn new(unit: ControlId, action: Action, live: bool) -> Self {
        if live {
            debug!("{unit}: {:?}", action);
        } else {
            warn!("{unit}: evaluated without a live reading, decision {:?} uses defaults", action);
        }
        Self { unit, action, live }
    }

    pub fn message(&self) -> &'static str {
        self.action.message()
    }

    /// True if the shutdown system reported `cause`.
    pub fn has_cause(&self, cause: ShutdownCause) -> bool {
        match self.action {
            Action::EmergencyShutdown { causes } => causes & cause.mask() != 0,
            _ => false,
        }
    }
}

impl fmt::Display for Decision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

// ---------------------------------------------------------------------------
// Inputs and the unit trait
// ---------------------------------------------------------------------------

/// A control input fed by one sensor kind. Remembers whether it was ever set.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Input {
    kind: SensorKind,
    value: Option<f64>,
}

impl Input {
    pub const fn new(kind: SensorKind) -> Self {
        Self { kind, value: None }
    }

    /// Store `value`. Non-finite values are rejected and the input is unchanged.
    pub fn set(&mut self, value: f64) -> Result<(), SensorError> {
        if !value.is_finite() {
            warn!("{} input rejected {value}", self.kind.name());
            return Err(SensorError::NotFinite(self.kind));
        }
        self.value = Some(value);
        Ok(())
    }

    /// Current value; 0 if never set.
    pub fn get(self) -> f64 {
        self.value.unwrap_or(0.0)
    }

    pub fn is_live(self) -> bool {
        self.value.is_some()
    }

    pub fn kind(self) -> SensorKind {
        self.kind
    }
}

/// Capability shared by every control unit.
pub trait ControlUnit {
    fn id(&self) -> ControlId;

    fn name(&self) -> &'static str {
        self.id().name()
    }

    /// Apply the unit's rule to its current inputs.
    fn evaluate(&mut self) -> Decision;
}
