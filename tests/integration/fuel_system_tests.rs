//! Integration tests for the FuelSystem command → event pipeline.

use crate::mock_sink::RecordingSink;

use fuelsys::app::commands::AppCommand;
use fuelsys::app::events::AppEvent;
use fuelsys::app::service::FuelSystem;
use fuelsys::config::{SystemConfig, Wiring};
use fuelsys::control::{Action, ControlId};
use fuelsys::error::{Error, SensorError};
use fuelsys::sensors::SensorKind;

fn make_system(wiring: Wiring) -> (FuelSystem, RecordingSink) {
    let system = FuelSystem::new(SystemConfig {
        wiring,
        ..SystemConfig::default()
    })
    .unwrap();
    (system, RecordingSink::new())
}

#[test]
fn start_emits_wiring() {
    let (mut system, mut sink) = make_system(Wiring::Sensors);
    system.start(&mut sink);
    assert_eq!(
        sink.events,
        [AppEvent::Started {
            wiring: Wiring::Sensors
        }]
    );
}

#[test]
fn every_sensor_kind_reports_its_line() {
    let (mut system, mut sink) = make_system(Wiring::Legacy);

    let readings = [
        (SensorKind::Pressure, 4.0),
        (SensorKind::FuelLevel, 0.0),
        (SensorKind::Temperature, 88.5),
        (SensorKind::AirMass, 12.0),
        (SensorKind::Oxygen, 21.0),
        (SensorKind::Emissions, 40.0),
        (SensorKind::FilterContamination, 1.0),
        (SensorKind::Crankshaft, 3200.0),
    ];
    for (kind, value) in readings {
        system.update_sensor(kind, value, &mut sink).unwrap();
        assert_eq!(system.sensors().value(kind), value);
    }

    assert_eq!(
        sink.lines(),
        [
            "Pressure updated to 4 bar",
            "Fuel level is empty",
            "Temperature updated to 88.5 °C",
            "Air mass updated to 12 g/s",
            "Oxygen level updated to 21%",
            "Emissions level updated to 40%",
            "Filter is contaminated",
            "Crankshaft speed updated to 3200 rpm",
        ]
    );

    let snap = system.snapshot();
    assert_eq!(snap.air_mass_g_per_s, 12.0);
    assert_eq!(snap.filter_contamination, 1.0);
    assert_eq!(snap.crankshaft_rpm, 3200.0);
}

#[test]
fn nan_reading_is_rejected_and_reported() {
    let (mut system, mut sink) = make_system(Wiring::Sensors);
    system.update_sensor(SensorKind::Pressure, 3.0, &mut sink).unwrap();

    let err = system
        .update_sensor(SensorKind::Pressure, f64::NAN, &mut sink)
        .unwrap_err();

    assert_eq!(err, Error::Sensor(SensorError::NotFinite(SensorKind::Pressure)));
    assert_eq!(system.sensors().value(SensorKind::Pressure), 3.0);
    assert_eq!(sink.rejected(), 1);
    assert_eq!(sink.lines(), ["Pressure updated to 3 bar"]);
}

#[test]
fn rejected_command_does_not_stop_script() {
    let (mut system, mut sink) = make_system(Wiring::Legacy);

    let script = [
        AppCommand::UpdateSensor {
            kind: SensorKind::FuelLevel,
            value: f64::INFINITY,
        },
        AppCommand::UpdateSensor {
            kind: SensorKind::Oxygen,
            value: f64::NEG_INFINITY,
        },
        AppCommand::FeedFuelPump,
    ];
    let failed = system.run_script(&script, &mut sink);

    assert_eq!(failed, 2);
    assert_eq!(sink.rejected(), 2);
    // Fuel level stayed at its initial 0, so the pump runs.
    assert_eq!(sink.lines(), ["Fuel Pump is ON due to low fuel level."]);
}

#[test]
fn evaluate_all_emits_one_decision_per_unit() {
    let (mut system, mut sink) = make_system(Wiring::Legacy);

    system
        .handle_command(AppCommand::EvaluateAll, &mut sink)
        .unwrap();

    let decisions = sink.decisions();
    let units: Vec<_> = decisions.iter().map(|d| d.unit).collect();
    assert_eq!(units, ControlId::ALL);
    // Nothing was fed: every rule runs on zeros.
    let actions: Vec<_> = decisions.iter().map(|d| d.action).collect();
    assert_eq!(
        actions,
        [Action::PumpOn, Action::ValveOpen, Action::InjectorActive, Action::Normal]
    );
    assert!(decisions.iter().all(|d| !d.live));
}

#[test]
fn sensor_wiring_never_feeds_the_pump_implicitly() {
    let (mut system, mut sink) = make_system(Wiring::Sensors);

    system.update_sensor(SensorKind::FuelLevel, 1.0, &mut sink).unwrap();
    assert!(sink.decisions().is_empty(), "updates alone must not evaluate");

    let d = system.evaluate(ControlId::FuelPump, &mut sink);
    assert!(!d.live);
    assert_eq!(d.action, Action::PumpOn);

    system
        .handle_command(AppCommand::FeedFuelPump, &mut sink)
        .unwrap();
    assert_eq!(sink.decisions().last().map(|d| d.action), Some(Action::PumpOff));
}

#[test]
fn state_accessors_reflect_last_evaluation() {
    let (mut system, mut sink) = make_system(Wiring::Sensors);
    assert!(!system.solenoid_valve().is_open());
    assert!(!system.injector().is_injecting());

    system.update_sensor(SensorKind::Oxygen, 20.0, &mut sink).unwrap();
    system.evaluate_all(&mut sink);

    assert!(system.solenoid_valve().is_open());
    assert!(!system.injector().is_injecting());
    assert!(!system.shutdown_system().is_emergency());
    assert!(system.fuel_pump().is_on());
}
