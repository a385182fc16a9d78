//! Fuzz target: `SystemConfig` JSON parsing
//!
//! Feeds arbitrary bytes through the JSON config deserializer and verifies:
//! - No panics under arbitrary input
//! - Every document that parses also builds a `FuelSystem`
//!   (JSON numbers are always finite)
//! - The reference scenario runs on it without a failed step
//!
//! cargo fuzz run fuzz_config_json

#![no_main]

use fuelsys::app::events::AppEvent;
use fuelsys::app::ports::EventSink;
use fuelsys::app::service::FuelSystem;
use fuelsys::config::SystemConfig;
use libfuzzer_sys::fuzz_target;

struct Discard;

impl EventSink for Discard {
    fn emit(&mut self, _event: &AppEvent) {}
}

fuzz_target!(|data: &[u8]| {
    let Ok(config) = serde_json::from_slice::<SystemConfig>(data) else {
        return;
    };
    let mut system = match FuelSystem::new(config) {
        Ok(system) => system,
        Err(e) => panic!("parsed config failed to build: {e}"),
    };
    system.start(&mut Discard);
    assert_eq!(system.run_reference_scenario(&mut Discard), 0);
});
