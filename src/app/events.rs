//! Outbound application events.
//!
//! The [`FuelSystem`](super::service::FuelSystem) emits these through the
//! [`EventSink`](super::ports::EventSink) port.

use serde::Serialize;

use crate::config::Wiring;
use crate::control::Decision;
use crate::sensors::{SensorKind, SensorUpdate};

/// Structured events emitted by the fuel system core.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum AppEvent {
    /// The service has started (carries the active wiring policy).
    Started { wiring: Wiring },

    /// A sensor accepted a new reading.
    SensorUpdated(SensorUpdate),

    /// A control unit was evaluated.
    Decision(Decision),

    /// A sensor rejected a reading; its previous value is unchanged.
    Rejected { kind: SensorKind, value: f64 },
}

impl AppEvent {
    /// The human-readable status line for this event, if it has one.
    pub fn status_line(&self) -> Option<&str> {
        match self {
            Self::SensorUpdated(u) => Some(u.message.as_str()),
            Self::Decision(d) => Some(d.message()),
            Self::Started { .. } | Self::Rejected { .. } => None,
        }
    }
}
