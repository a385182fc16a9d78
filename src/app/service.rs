//! Fuel system service: the hexagonal core.
//!
//! [`FuelSystem`] owns the sensor hub and the four control units.  It
//! exposes a hardware-agnostic API; all output flows through an
//! [`EventSink`] injected at call sites, so the whole service is testable
//! with a recording sink.
//!
//! ```text
//!  AppCommand ──▶ ┌──────────────────────────────┐ ──▶ EventSink
//!                 │          FuelSystem          │
//!                 │  SensorHub · control units   │
//!                 └──────────────────────────────┘
//! ```

use log::{info, warn};

use crate::config::{SystemConfig, Wiring};
use crate::control::{
    ControlId, ControlUnit, Decision, FuelPump, InjectorControl, SafetyShutdownSystem,
    SolenoidValve,
};
use crate::error::Result;
use crate::sensors::{SensorHub, SensorKind, SensorSnapshot, SensorUpdate};

use super::commands::{AppCommand, REFERENCE_SCENARIO};
use super::events::AppEvent;
use super::ports::EventSink;

/// Decisions from one [`FuelSystem::evaluate_all`] pass, in [`ControlId::ALL`] order.
pub type DecisionBatch = heapless::Vec<Decision, { ControlId::COUNT }>;

// ───────────────────────────────────────────────────────────────
// FuelSystem
// ───────────────────────────────────────────────────────────────

pub struct FuelSystem {
    config: SystemConfig,
    sensors: SensorHub,
    fuel_pump: FuelPump,
    solenoid_valve: SolenoidValve,
    injector: InjectorControl,
    shutdown: SafetyShutdownSystem,
}

impl FuelSystem {
    /// Construct every sensor and control unit from `config`.
    ///
    /// Fails with [`ConfigError::ValidationFailed`](crate::error::ConfigError::ValidationFailed)
    /// if a threshold is not finite.
    pub fn new(config: SystemConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            sensors: SensorHub::new(),
            fuel_pump: FuelPump::new(),
            solenoid_valve: SolenoidValve::new(config.valve_close_pressure_bar),
            injector: InjectorControl::new(config.injector_oxygen_limit_pct),
            shutdown: SafetyShutdownSystem::new(
                config.emissions_limit_pct,
                config.temperature_limit_c,
            ),
            config,
        })
    }

    pub fn start(&mut self, sink: &mut impl EventSink) {
        let wiring = self.config.wiring;
        if wiring == Wiring::Legacy {
            info!("FuelSystem started, legacy wiring: only the fuel pump receives sensor data");
        } else {
            info!("FuelSystem started, wiring={:?}", wiring);
        }
        sink.emit(&AppEvent::Started { wiring });
    }

    // ── Operations ────────────────────────────────────────────

    /// Store a reading on one sensor and emit its status line.
    ///
    /// Under [`Wiring::Sensors`] the value is also handed to the control
    /// unit that consumes it.  A rejected reading emits
    /// [`AppEvent::Rejected`] and changes nothing.
    pub fn update_sensor(
        &mut self,
        kind: SensorKind,
        value: f64,
        sink: &mut impl EventSink,
    ) -> Result<SensorUpdate> {
        let update = match self.sensors.update(kind, value) {
            Ok(update) => update,
            Err(e) => {
                sink.emit(&AppEvent::Rejected { kind, value });
                return Err(e.into());
            }
        };
        sink.emit(&AppEvent::SensorUpdated(update.clone()));

        if self.config.wiring == Wiring::Sensors {
            self.forward(kind, value)?;
        }
        Ok(update)
    }

    /// Hand the fuel-level reading to the pump; the pump evaluates at once.
    pub fn feed_fuel_pump(&mut self, sink: &mut impl EventSink) -> Result<Decision> {
        let level = self.sensors.value(SensorKind::FuelLevel);
        let decision = self.fuel_pump.set_fuel_level(level)?;
        sink.emit(&AppEvent::Decision(decision));
        Ok(decision)
    }

    /// Evaluate one control unit on its current inputs.
    pub fn evaluate(&mut self, unit: ControlId, sink: &mut impl EventSink) -> Decision {
        let decision = self.unit_mut(unit).evaluate();
        sink.emit(&AppEvent::Decision(decision));
        decision
    }

    /// Evaluate every control unit in [`ControlId::ALL`] order.
    pub fn evaluate_all(&mut self, sink: &mut impl EventSink) -> DecisionBatch {
        let mut batch = DecisionBatch::new();
        for unit in ControlId::ALL {
            // Capacity equals ControlId::COUNT.
            let _ = batch.push(self.evaluate(unit, sink));
        }
        batch
    }

    // ── Command handling ──────────────────────────────────────

    pub fn handle_command(&mut self, cmd: AppCommand, sink: &mut impl EventSink) -> Result<()> {
        match cmd {
            AppCommand::UpdateSensor { kind, value } => {
                self.update_sensor(kind, value, sink)?;
            }
            AppCommand::FeedFuelPump => {
                self.feed_fuel_pump(sink)?;
            }
            AppCommand::Evaluate(unit) => {
                self.evaluate(unit, sink);
            }
            AppCommand::EvaluateAll => {
                self.evaluate_all(sink);
            }
        }
        Ok(())
    }

    /// Run `script` in order.  A rejected reading does not stop the script.
    /// Returns the number of commands that failed.
    pub fn run_script(&mut self, script: &[AppCommand], sink: &mut impl EventSink) -> usize {
        let mut failed = 0;
        for cmd in script {
            if let Err(e) = self.handle_command(*cmd, sink) {
                warn!("{:?} failed: {e}", cmd);
                failed += 1;
            }
        }
        failed
    }

    /// The fixed driver sequence: five sensor updates, the pump feed, then
    /// one evaluation of the valve, injector and shutdown system.
    pub fn run_reference_scenario(&mut self, sink: &mut impl EventSink) -> usize {
        self.run_script(&REFERENCE_SCENARIO, sink)
    }

    // ── Queries ───────────────────────────────────────────────

    pub fn config(&self) -> &SystemConfig {
        &self.config
    }

    pub fn sensors(&self) -> &SensorHub {
        &self.sensors
    }

    pub fn snapshot(&self) -> SensorSnapshot {
        self.sensors.snapshot()
    }

    pub fn fuel_pump(&self) -> &FuelPump {
        &self.fuel_pump
    }

    pub fn solenoid_valve(&self) -> &SolenoidValve {
        &self.solenoid_valve
    }

    pub fn injector(&self) -> &InjectorControl {
        &self.injector
    }

    pub fn shutdown_system(&self) -> &SafetyShutdownSystem {
        &self.shutdown
    }

    // ── Internal ──────────────────────────────────────────────

    fn unit_mut(&mut self, unit: ControlId) -> &mut dyn ControlUnit {
        match unit {
            ControlId::FuelPump => &mut self.fuel_pump,
            ControlId::SolenoidValve => &mut self.solenoid_valve,
            ControlId::InjectorControl => &mut self.injector,
            ControlId::SafetyShutdownSystem => &mut self.shutdown,
        }
    }

    /// Route a reading to its consumer.  Fuel level is excluded: it reaches
    /// the pump only through [`feed_fuel_pump`](Self::feed_fuel_pump).
    fn forward(&mut self, kind: SensorKind, value: f64) -> Result<()> {
        match kind {
            SensorKind::Pressure => self.solenoid_valve.set_pressure(value)?,
            SensorKind::Oxygen => self.injector.set_oxygen_level(value)?,
            SensorKind::Emissions => self.shutdown.set_emissions(value)?,
            SensorKind::Temperature => self.shutdown.set_temperature(value)?,
            SensorKind::FuelLevel
            | SensorKind::AirMass
            | SensorKind::FilterContamination
            | SensorKind::Crankshaft => {}
        }
        Ok(())
    }
}
