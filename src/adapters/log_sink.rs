//! Log-based event sink adapter.
//!
//! Implements [`EventSink`] by writing structured application events to
//! the `log` facade.  The `fuelsys` binary uses it for `--format log`.

use log::{info, warn};

use crate::app::events::AppEvent;
use crate::app::ports::EventSink;

/// Adapter that logs every [`AppEvent`].
pub struct LogEventSink;

impl LogEventSink {
    pub fn new() -> Self {
        Self
    }
}

impl Default for LogEventSink {
    fn default() -> Self {
        Self::new()
    }
}

impl EventSink for LogEventSink {
    fn emit(&mut self, event: &AppEvent) {
        match event {
            AppEvent::Started { wiring } => {
                info!("START | wiring={:?}", wiring);
            }
            AppEvent::SensorUpdated(u) => {
                info!("SENSOR | {} = {} | {}", u.kind, u.value, u.message);
            }
            AppEvent::Decision(d) => {
                info!(
                    "DECISION | {} | {:?} | live={} | {}",
                    d.unit,
                    d.action,
                    d.live,
                    d.message()
                );
            }
            AppEvent::Rejected { kind, value } => {
                warn!("REJECTED | {} | value={}", kind, value);
            }
        }
    }
}
