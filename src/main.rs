//! fuelsys: reference driver.
//!
//! Builds the fuel system, runs the fixed reference scenario and prints one
//! line per sensor update and per control decision.  A failed write to
//! stdout ends the run with an error.
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │  JsonConfigFile (ConfigPort)                             │
//! │        │                                                 │
//! │        ▼                                                 │
//! │  FuelSystem ── REFERENCE_SCENARIO ──▶ EventSink          │
//! │                                       ├ ConsoleSink text │
//! │                                       ├ ConsoleSink json │
//! │                                       └ LogEventSink     │
//! └──────────────────────────────────────────────────────────┘
//! ```
#![deny(unused_must_use)]

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use log::{info, warn};

use fuelsys::adapters::config_file::JsonConfigFile;
use fuelsys::adapters::console::{ConsoleSink, LineFormat};
use fuelsys::adapters::log_sink::LogEventSink;
use fuelsys::app::ports::{ConfigPort, EventSink};
use fuelsys::app::service::FuelSystem;
use fuelsys::config::{SystemConfig, Wiring};

/// Run the reference fuel system scenario.
#[derive(Parser)]
#[command(version)]
struct Cli {
    /// JSON configuration file (missing fields take defaults)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// How to print events
    #[arg(short, long, default_value = "text")]
    format: PrintFormat,

    /// Override the configured sensor wiring
    #[arg(short, long)]
    wiring: Option<WiringArg>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum PrintFormat {
    Text,
    Json,
    Log,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum WiringArg {
    Legacy,
    Sensors,
}

impl From<WiringArg> for Wiring {
    fn from(arg: WiringArg) -> Self {
        match arg {
            WiringArg::Legacy => Wiring::Legacy,
            WiringArg::Sensors => Wiring::Sensors,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Log format emits events at info level.
    let default_filter = match cli.format {
        PrintFormat::Log => "info",
        PrintFormat::Text | PrintFormat::Json => "warn",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    let config = resolve_config(cli.config.as_deref(), cli.wiring)?;
    let mut system = FuelSystem::new(config).context("building fuel system")?;
    info!("config: {:?}", system.config());

    let line_format = match cli.format {
        PrintFormat::Text => LineFormat::Text,
        PrintFormat::Json => LineFormat::Json,
        PrintFormat::Log => {
            run(&mut system, &mut LogEventSink::new());
            return Ok(());
        }
    };
    let _ = print_events(&mut system, std::io::stdout().lock(), line_format)
        .context("writing events to stdout")?;

    Ok(())
}

/// Load `path` if given (defaults otherwise), then apply the `--wiring` override.
fn resolve_config(path: Option<&Path>, wiring: Option<WiringArg>) -> Result<SystemConfig> {
    let mut config = match path {
        Some(path) => {
            let file = JsonConfigFile::new(path);
            file.load()
                .with_context(|| format!("loading config from {}", file.path().display()))?
        }
        None => SystemConfig::default(),
    };
    if let Some(wiring) = wiring {
        config.wiring = wiring.into();
    }
    Ok(config)
}

/// Run the scenario into a console sink over `out`; fails on the first write error.
fn print_events<W: Write>(
    system: &mut FuelSystem,
    out: W,
    format: LineFormat,
) -> std::io::Result<W> {
    let mut sink = ConsoleSink::new(out, format);
    run(system, &mut sink);
    sink.finish()
}

fn run(system: &mut FuelSystem, sink: &mut impl EventSink) {
    system.start(sink);
    let failed = system.run_reference_scenario(sink);
    if failed > 0 {
        warn!("{failed} scenario step(s) failed");
    }
}
