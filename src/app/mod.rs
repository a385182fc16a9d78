//! Application core: pure domain logic, zero I/O.
//!
//! This module wires sensors to control units and turns commands into
//! events.  All output goes through the **port traits** defined in
//! [`ports`], keeping this layer fully testable without a console.

pub mod commands;
pub mod events;
pub mod ports;
pub mod service;
