//! Recording event sink for integration tests.
//!
//! Keeps every emitted event so tests can assert on the full output
//! history without capturing stdout.

use fuelsys::app::events::AppEvent;
use fuelsys::app::ports::EventSink;
use fuelsys::control::Decision;

pub struct RecordingSink {
    pub events: Vec<AppEvent>,
}

#[allow(dead_code)]
impl RecordingSink {
    pub fn new() -> Self {
        Self {
            events: Vec::new(),
        }
    }

    /// Status lines in emission order, as the console would print them.
    pub fn lines(&self) -> Vec<String> {
        self.events
            .iter()
            .filter_map(AppEvent::status_line)
            .map(str::to_owned)
            .collect()
    }

    pub fn decisions(&self) -> Vec<Decision> {
        self.events
            .iter()
            .filter_map(|e| match e {
                AppEvent::Decision(d) => Some(*d),
                _ => None,
            })
            .collect()
    }

    pub fn rejected(&self) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e, AppEvent::Rejected { .. }))
            .count()
    }
}

impl Default for RecordingSink {
    fn default() -> Self {
        Self::new()
    }
}

impl EventSink for RecordingSink {
    fn emit(&mut self, event: &AppEvent) {
        self.events.push(event.clone());
    }
}
