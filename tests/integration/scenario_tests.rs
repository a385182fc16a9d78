//! End-to-end scenarios: the reference driver and the fuel-pump /
//! shutdown sequences, checked through the emitted status lines.

use crate::mock_sink::RecordingSink;

use fuelsys::app::commands::{AppCommand, REFERENCE_SCENARIO};
use fuelsys::app::service::FuelSystem;
use fuelsys::config::{SystemConfig, Wiring};
use fuelsys::control::{Action, ControlId, ShutdownCause};
use fuelsys::sensors::SensorKind;

fn system(wiring: Wiring) -> (FuelSystem, RecordingSink) {
    let config = SystemConfig {
        wiring,
        ..SystemConfig::default()
    };
    let mut system = FuelSystem::new(config).unwrap();
    let mut sink = RecordingSink::new();
    system.start(&mut sink);
    (system, sink)
}

// ── Reference driver ──────────────────────────────────────────

#[test]
fn reference_scenario_prints_expected_lines() {
    let (mut system, mut sink) = system(Wiring::Legacy);

    let failed = system.run_reference_scenario(&mut sink);

    assert_eq!(failed, 0);
    assert_eq!(
        sink.lines(),
        [
            "Pressure updated to 3.5 bar",
            "Fuel level is full",
            "Temperature updated to 75 °C",
            "Oxygen level updated to 14%",
            "Emissions level updated to 85%",
            "Fuel Pump is OFF.",
            "Solenoid Valve is OPEN.",
            "Injector Control is active",
            "System is operating normally.",
        ]
    );
}

#[test]
fn reference_scenario_flags_unfed_units() {
    let (mut system, mut sink) = system(Wiring::Legacy);
    system.run_reference_scenario(&mut sink);

    let live: Vec<_> = sink.decisions().iter().map(|d| (d.unit, d.live)).collect();
    assert_eq!(
        live,
        [
            (ControlId::FuelPump, true),
            (ControlId::SolenoidValve, false),
            (ControlId::InjectorControl, false),
            (ControlId::SafetyShutdownSystem, false),
        ]
    );
}

#[test]
fn reference_scenario_with_sensor_wiring_sees_live_readings() {
    let (mut system, mut sink) = system(Wiring::Sensors);
    system.run_reference_scenario(&mut sink);

    let lines = sink.lines();
    assert_eq!(
        &lines[5..],
        [
            "Fuel Pump is OFF.",
            "Solenoid Valve is OPEN.",
            "Injector Control is active",
            "Emergency shutdown initiated!",
        ]
    );
    assert!(sink.decisions().iter().all(|d| d.live));
    assert!(system.shutdown_system().is_emergency());
}

#[test]
fn script_constant_matches_run_reference_scenario() {
    let (mut a, mut sink_a) = system(Wiring::Legacy);
    let (mut b, mut sink_b) = system(Wiring::Legacy);

    a.run_reference_scenario(&mut sink_a);
    b.run_script(&REFERENCE_SCENARIO, &mut sink_b);

    assert_eq!(sink_a.events, sink_b.events);
}

// ── Fuel pump sequence ────────────────────────────────────────

#[test]
fn fuel_pump_follows_fed_level() {
    let (mut system, mut sink) = system(Wiring::Legacy);

    system.update_sensor(SensorKind::FuelLevel, 1.0, &mut sink).unwrap();
    let d = system.feed_fuel_pump(&mut sink).unwrap();
    assert_eq!(d.action, Action::PumpOff);
    assert!(!system.fuel_pump().is_on());

    system.update_sensor(SensorKind::FuelLevel, 0.0, &mut sink).unwrap();
    let d = system.feed_fuel_pump(&mut sink).unwrap();
    assert_eq!(d.action, Action::PumpOn);
    assert!(system.fuel_pump().is_on());

    assert_eq!(
        sink.lines(),
        [
            "Fuel level is full",
            "Fuel Pump is OFF.",
            "Fuel level is empty",
            "Fuel Pump is ON due to low fuel level.",
        ]
    );
}

// ── Safety shutdown sequence ──────────────────────────────────

#[test]
fn shutdown_branches_end_to_end() {
    let (mut system, mut sink) = system(Wiring::Sensors);

    let cases = [
        (85.0, 75.0, Some(ShutdownCause::HighEmissions)),
        (50.0, 95.0, Some(ShutdownCause::OverTemperature)),
        (50.0, 50.0, None),
    ];

    for (emissions, temperature, cause) in cases {
        let script = [
            AppCommand::UpdateSensor {
                kind: SensorKind::Emissions,
                value: emissions,
            },
            AppCommand::UpdateSensor {
                kind: SensorKind::Temperature,
                value: temperature,
            },
        ];
        assert_eq!(system.run_script(&script, &mut sink), 0);

        let d = system.evaluate(ControlId::SafetyShutdownSystem, &mut sink);
        match cause {
            Some(cause) => {
                assert_eq!(d.message(), "Emergency shutdown initiated!");
                assert!(d.has_cause(cause), "{emissions}/{temperature}");
                assert_eq!(
                    d.action,
                    Action::EmergencyShutdown {
                        causes: cause.mask()
                    }
                );
            }
            None => {
                assert_eq!(d.action, Action::Normal);
                assert_eq!(d.message(), "System is operating normally.");
            }
        }
    }
}
