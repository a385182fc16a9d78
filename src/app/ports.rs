//! Port traits: the boundary between the fuel system core and the outside world.
//!
//! ```text
//!   Adapter ──▶ Port trait ──▶ FuelSystem (domain)
//! ```
//!
//! Driven adapters (event sinks, config sources) implement these traits.
//! [`FuelSystem`](super::service::FuelSystem) consumes them via generics,
//! so the domain core never touches stdout or the filesystem directly.

use crate::config::SystemConfig;
use crate::error::ConfigError;

use super::events::AppEvent;

// ───────────────────────────────────────────────────────────────
// Event sink port (driven adapter: domain → console / logging)
// ───────────────────────────────────────────────────────────────

/// The domain emits structured [`AppEvent`]s through this port.
/// Adapters decide where they go (stdout lines, JSON lines, the logger).
pub trait EventSink {
    fn emit(&mut self, event: &AppEvent);
}

// ───────────────────────────────────────────────────────────────
// Configuration port (driven adapter: config source → domain)
// ───────────────────────────────────────────────────────────────

/// Loads system configuration.
///
/// Implementations MUST validate before returning.  Invalid values are
/// rejected with [`ConfigError::ValidationFailed`], never clamped.
pub trait ConfigPort {
    fn load(&self) -> Result<SystemConfig, ConfigError>;
}
