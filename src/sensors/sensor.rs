//! A single named scalar sensor.

use log::warn;
use serde::Serialize;

use super::SensorKind;
use crate::error::SensorError;

/// Result of an accepted update: the stored value and its status line.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SensorUpdate {
    pub kind: SensorKind,
    pub value: f64,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sensor {
    kind: SensorKind,
    value: f64,
}

impl Sensor {
    pub fn new(kind: SensorKind) -> Self {
        Self { kind, value: 0.0 }
    }

    pub fn kind(&self) -> SensorKind {
        self.kind
    }

    pub fn name(&self) -> &'static str {
        self.kind.name()
    }

    /// Last accepted reading (0 before the first update).
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Store `value` and produce the kind's status line.
    ///
    /// Finite values are stored verbatim, including implausible ones.
    /// NaN and infinities are rejected and the previous value is kept.
    pub fn update(&mut self, value: f64) -> Result<SensorUpdate, SensorError> {
        if !value.is_finite() {
            warn!("{}: rejected non-finite reading {value}", self.name());
            return Err(SensorError::NotFinite(self.kind));
        }
        if !self.kind.is_plausible(value) {
            let (min, max) = self.kind.plausible_range();
            warn!(
                "{}: reading {value} outside plausible range [{min}, {max}]",
                self.name()
            );
        }

        self.value = value;
        Ok(SensorUpdate {
            kind: self.kind,
            value,
            message: self.kind.describe(value),
        })
    }
}
