//! Injector control: injects while exhaust oxygen is low.

use super::{Action, ControlId, ControlUnit, Decision, Input};
use crate::error::SensorError;
use crate::sensors::SensorKind;

#[derive(Debug)]
pub struct InjectorControl {
    oxygen_level: Input,
    active_below_pct: f64,
    is_injecting: bool,
}

impl InjectorControl {
    pub fn new(active_below_pct: f64) -> Self {
        Self {
            oxygen_level: Input::new(SensorKind::Oxygen),
            active_below_pct,
            is_injecting: false,
        }
    }

    pub fn set_oxygen_level(&mut self, oxygen_pct: f64) -> Result<(), SensorError> {
        self.oxygen_level.set(oxygen_pct)
    }

    pub fn is_injecting(&self) -> bool {
        self.is_injecting
    }
}

impl ControlUnit for InjectorControl {
    fn id(&self) -> ControlId {
        ControlId::InjectorControl
    }

    fn evaluate(&mut self) -> Decision {
        self.is_injecting = self.oxygen_level.get() < self.active_below_pct;
        let action = if self.is_injecting {
            Action::InjectorActive
        } else {
            Action::InjectorInactive
        };
        Decision::new(self.id(), action, self.oxygen_level.is_live())
    }
}
