//! Fuzz target: sensor update scripts
//!
//! Decodes the input as a sequence of 9-byte records
//! `[kind selector, f64 little-endian]`, runs them through a sensor-wired
//! `FuelSystem` and verifies:
//! - No panics, including for NaN and infinite readings
//! - Every sensor holds a finite value afterwards
//! - The rejected count equals the number of non-finite readings
//!
//! cargo fuzz run fuzz_sensor_script

#![no_main]

use fuelsys::app::commands::AppCommand;
use fuelsys::app::events::AppEvent;
use fuelsys::app::ports::EventSink;
use fuelsys::app::service::FuelSystem;
use fuelsys::config::{SystemConfig, Wiring};
use fuelsys::sensors::SensorKind;
use libfuzzer_sys::fuzz_target;

struct Discard;

impl EventSink for Discard {
    fn emit(&mut self, _event: &AppEvent) {}
}

fuzz_target!(|data: &[u8]| {
    let mut script = Vec::new();
    for record in data.chunks_exact(9) {
        let kind = SensorKind::ALL[record[0] as usize % SensorKind::COUNT];
        let bytes: [u8; 8] = record[1..9].try_into().unwrap_or([0; 8]);
        script.push(AppCommand::UpdateSensor {
            kind,
            value: f64::from_le_bytes(bytes),
        });
    }
    script.push(AppCommand::FeedFuelPump);
    script.push(AppCommand::EvaluateAll);

    let expected_failures = script
        .iter()
        .filter(|c| matches!(c, AppCommand::UpdateSensor { value, .. } if !value.is_finite()))
        .count();

    let Ok(mut system) = FuelSystem::new(SystemConfig {
        wiring: Wiring::Sensors,
        ..SystemConfig::default()
    }) else {
        return;
    };
    let failed = system.run_script(&script, &mut Discard);

    assert_eq!(failed, expected_failures);
    assert!(system.sensors().iter().all(|s| s.value().is_finite()));
});
